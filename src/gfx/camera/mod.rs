pub mod camera_controller;
pub mod camera_utils;
pub mod orbit_camera;

// Re-export main types
pub use camera_controller::{CameraAction, CameraController};
pub use camera_utils::{CameraManager, CameraUniform};
pub use orbit_camera::OrbitCamera;
