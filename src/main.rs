use anyhow::Context as _;
use clap::Parser;

use tech_animation::{AppConfig, Args, TechAnimationApp};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = AppConfig::try_from(args).context("invalid command line")?;
    log::info!(
        "Starting with category '{}' at {}x{}",
        config.category,
        config.width,
        config.height
    );

    TechAnimationApp::new(config)?.run()
}
