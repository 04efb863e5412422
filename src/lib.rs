// src/lib.rs
//! Tech Animation
//!
//! Interactive 3D technology-stack scenes rendered with wgpu and winit.
//! Each category animates its stages and a marker travelling along the
//! category's data flow. The current view can be exported as a PDF page.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod gfx;
pub mod prelude;
pub mod scenes;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::TechAnimationApp;
pub use config::{AppConfig, Args};

/// Creates the application with default settings
pub fn default() -> anyhow::Result<TechAnimationApp> {
    TechAnimationApp::new(AppConfig::default())
}
