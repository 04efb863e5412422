//! # Tech Animation Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use tech_animation::prelude::*;
//! ```
//!
//! ```no_run
//! use tech_animation::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig {
//!         category: Category::Database.id().to_string(),
//!         ..AppConfig::default()
//!     };
//!     TechAnimationApp::new(config)?.run()
//! }
//! ```

// Application
pub use crate::app::TechAnimationApp;
pub use crate::config::AppConfig;
pub use crate::error::{ExportError, RenderError};

// Scenes and animation
pub use crate::animation::{AnimationManager, Animator, Playback};
pub use crate::scenes::{select_scene, Category, SceneBlueprint, SceneChoice};

// Graphics
pub use crate::gfx::camera::{CameraAction, CameraManager, OrbitCamera};
pub use crate::gfx::scene::Scene;
pub use crate::gfx::RenderEngine;

// Export and input
pub use crate::export::{PdfExporter, ExportQueue};
pub use crate::ui::{action_for_key, UiAction};

pub use cgmath::Vector3;
