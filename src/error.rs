//! Error types for the viewer
//!
//! None of these reach the user as a dialog. Unknown categories fall back to
//! the default scene and a missing capture skips the export; the errors below
//! only cover the cases that are worth a log line or that abort startup.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning a captured frame into a PDF file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode captured frame: {0}")]
    Encode(#[from] image::ImageError),

    #[error("captured frame is {width}x{height} but holds {len} bytes")]
    FrameSize { width: u32, height: u32, len: usize },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export worker panicked")]
    WorkerPanicked,
}

/// GPU setup failures. These abort startup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}

/// Invalid command-line configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },

    #[error("output directory {0} does not exist or is not a directory")]
    OutputDir(PathBuf),
}
