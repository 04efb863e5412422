//! Core rendering functionality
//!
//! Handles render pipelines, frame rendering and offscreen capture.

pub mod capture;
pub mod pipeline_manager;
pub mod render_engine;

// Re-export main types
pub use capture::CapturedFrame;
pub use pipeline_manager::{PipelineConfig, PipelineManager, PipelineStats};
pub use render_engine::RenderEngine;
