//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::scenes::Category;

#[derive(Parser, Debug, Clone)]
#[command(name = "tech-animation")]
#[command(about = "Animated 3D diagrams of technology stacks", long_about = None)]
#[command(version)]
pub struct Args {
    /// Category to show first (fullstack, ai-ml, devops, mobile, database,
    /// web3, cybersecurity, iot, backend). Anything else shows the default scene.
    #[arg(short, long, default_value = "fullstack")]
    pub category: String,

    /// Window width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Folder exported PDFs are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Wait for vertical sync when presenting
    #[arg(long)]
    pub vsync: bool,

    /// Start with the animation paused
    #[arg(long)]
    pub paused: bool,
}

/// Validated settings the viewer starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub category: String,
    pub width: u32,
    pub height: u32,
    pub output_dir: PathBuf,
    pub vsync: bool,
    pub start_paused: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            category: Category::FullStack.id().to_string(),
            width: 1200,
            height: 800,
            output_dir: PathBuf::from("."),
            vsync: false,
            start_paused: false,
        }
    }
}

impl TryFrom<Args> for AppConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.width == 0 || args.height == 0 {
            return Err(ConfigError::WindowSize {
                width: args.width,
                height: args.height,
            });
        }
        if !args.output_dir.is_dir() {
            return Err(ConfigError::OutputDir(args.output_dir));
        }
        if Category::from_id(&args.category).is_none() {
            log::warn!("Unknown category '{}', showing the default scene", args.category);
        }

        Ok(Self {
            category: args.category,
            width: args.width,
            height: args.height,
            output_dir: args.output_dir,
            vsync: args.vsync,
            start_paused: args.paused,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tech-animation").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::try_from(parse(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_flags() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        let config = AppConfig::try_from(parse(&[
            "--category",
            "web3",
            "--width",
            "640",
            "--height",
            "480",
            "--output-dir",
            out,
            "--vsync",
            "--paused",
        ]))
        .unwrap();

        assert_eq!(config.category, "web3");
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.output_dir, dir.path());
        assert!(config.vsync);
        assert!(config.start_paused);
    }

    #[test]
    fn test_unknown_category_is_accepted() {
        let config = AppConfig::try_from(parse(&["-c", "quantum"])).unwrap();
        assert_eq!(config.category, "quantum");
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = AppConfig::try_from(parse(&["--width", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::WindowSize { width: 0, height: 800 }));
    }

    #[test]
    fn test_missing_output_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = AppConfig::try_from(parse(&["-o", missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::OutputDir(path) if path == missing));
    }
}
