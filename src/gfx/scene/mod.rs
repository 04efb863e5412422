//! # Scene Management Module
//!
//! Turns scene blueprints into drawable objects and keeps their per-frame
//! transforms in sync with the GPU.
//!
//! - [`Scene`] - objects, materials and the camera
//! - [`Object`] - one blueprint group with its meshes and labels
//! - [`Vertex3D`] - position + normal vertex format

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Object, Transform};
pub use scene::{Scene, SceneLayouts};
pub use vertex::Vertex3D;
