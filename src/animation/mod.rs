//! # Animation
//!
//! Time-driven posing of the loaded scene.
//!
//! - [`flow`] - the marker loop and its named legs
//! - [`motion`] - sine and spin offsets on group transforms
//! - [`animator`] - applies both to a [`Scene`](crate::gfx::scene::Scene) each frame
//! - [`playback`] - play/pause state
//! - [`manager`] - the current selection tying these together

pub mod animator;
pub mod flow;
pub mod manager;
pub mod motion;
pub mod playback;

pub use animator::Animator;
pub use manager::AnimationManager;
pub use playback::Playback;
