//! # Graphics Module
//!
//! Everything between a scene blueprint and pixels on screen.
//!
//! - **Camera** ([`camera`]) - orbit camera with clamped pan and zoom
//! - **Geometry** ([`geometry`]) - procedural meshes for node shapes
//! - **Rendering** ([`rendering`]) - pipelines, frame rendering and capture
//! - **Resources** ([`resources`]) - materials, global uniforms, textures
//! - **Scene** ([`scene`]) - objects built from blueprints
//!
//! ```no_run
//! use tech_animation::gfx::{camera::CameraManager, scene::Scene};
//! use tech_animation::scenes::select_scene;
//!
//! let mut scene = Scene::new(CameraManager::default());
//! scene.load_blueprint(&select_scene("database"));
//! // render_engine.prepare_scene(&mut scene);
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use rendering::render_engine::RenderEngine;
