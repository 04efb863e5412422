//! # User Interface
//!
//! Dear ImGui panels drawn over the scene.
//!
//! - [`UiManager`] - ImGui context, winit input and wgpu rendering
//! - [`panel`] - category selector, playback controls, camera overlay and labels
//! - [`actions`] - the commands panels and shortcuts produce
//!
//! Panels never mutate state themselves; the app collects their
//! [`UiAction`]s after the frame and applies them in order.

pub mod actions;
pub mod manager;
pub mod panel;

// Re-export main types
pub use actions::{action_for_key, UiAction};
pub use manager::UiManager;
pub use panel::{project_labels, viewer_ui, PanelStatus, ScreenLabel};
