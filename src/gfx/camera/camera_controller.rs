use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use super::orbit_camera::{OrbitCamera, PAN_STEP};

/// One-shot camera commands issued by the overlay buttons and keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ResetView,
}

impl CameraAction {
    pub fn apply(self, camera: &mut OrbitCamera) {
        match self {
            CameraAction::ZoomIn => camera.zoom_in(),
            CameraAction::ZoomOut => camera.zoom_out(),
            CameraAction::PanLeft => camera.pan_target(-PAN_STEP, 0.0),
            CameraAction::PanRight => camera.pan_target(PAN_STEP, 0.0),
            CameraAction::PanUp => camera.pan_target(0.0, PAN_STEP),
            CameraAction::PanDown => camera.pan_target(0.0, -PAN_STEP),
            CameraAction::ResetView => {
                log::info!("Resetting camera to default position");
                camera.reset_to_default();
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraAction::ZoomIn => "Zoom In",
            CameraAction::ZoomOut => "Zoom Out",
            CameraAction::PanLeft => "Pan Left",
            CameraAction::PanRight => "Pan Right",
            CameraAction::PanUp => "Pan Up",
            CameraAction::PanDown => "Pan Down",
            CameraAction::ResetView => "Reset View",
        }
    }
}

/// Mouse orbit, pan and wheel zoom.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    is_shift_held: bool,
    is_mouse_pressed: bool,
    /// Set while the UI owns the pointer; drags and scrolls are ignored.
    pub blocked: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(0.005, 0.5)
    }
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed: 0.01,
            is_shift_held: false,
            is_mouse_pressed: false,
            blocked: false,
        }
    }

    pub fn process_events(&mut self, event: &DeviceEvent, window: &Window, camera: &mut OrbitCamera) {
        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed && !self.blocked;
            }
            DeviceEvent::MouseWheel { delta } if !self.blocked => {
                let scroll_amount = -match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => *scroll as f32,
                };
                camera.add_distance(scroll_amount * self.zoom_speed);
                window.request_redraw();
            }
            DeviceEvent::MouseMotion { delta } if self.is_mouse_pressed => {
                if self.is_shift_held {
                    // SHIFT + DRAG = PAN (move focus point)
                    camera.pan((-delta.0 as f32 * self.pan_speed, delta.1 as f32 * self.pan_speed));
                } else {
                    // NORMAL DRAG = ROTATE (orbit around focus)
                    camera.add_yaw(-delta.0 as f32 * self.rotate_speed);
                    camera.add_pitch(delta.1 as f32 * self.rotate_speed);
                }
                window.request_redraw();
            }
            _ => (),
        }
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.process_key(key, event.state);
        }
    }

    /// Tracks Shift, which turns a left drag into a pan.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        if matches!(key, KeyCode::ShiftLeft | KeyCode::ShiftRight) {
            self.is_shift_held = state == ElementState::Pressed;
        }
    }

    pub fn is_shift_held(&self) -> bool {
        self.is_shift_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_pan_actions_move_target_in_their_direction() {
        let mut camera = OrbitCamera::default();
        CameraAction::PanRight.apply(&mut camera);
        CameraAction::PanUp.apply(&mut camera);
        assert_eq!(camera.target, Vector3::new(0.5, 0.5, 0.0));
        CameraAction::PanLeft.apply(&mut camera);
        CameraAction::PanDown.apply(&mut camera);
        CameraAction::PanDown.apply(&mut camera);
        assert_eq!(camera.target, Vector3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_zoom_actions_are_inverse() {
        let mut camera = OrbitCamera::default();
        CameraAction::ZoomOut.apply(&mut camera);
        assert!((camera.distance - 6.25).abs() < 1e-5);
        CameraAction::ZoomIn.apply(&mut camera);
        assert!((camera.distance - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_controller_starts_idle() {
        let controller = CameraController::default();
        assert!(!controller.is_shift_held());
        assert!(!controller.blocked);
    }

    #[test]
    fn test_shift_release_clears_pan_modifier() {
        let mut controller = CameraController::default();
        controller.process_key(KeyCode::ShiftLeft, ElementState::Pressed);
        assert!(controller.is_shift_held());

        // releases still count while the pointer is over a panel
        controller.blocked = true;
        controller.process_key(KeyCode::ShiftLeft, ElementState::Released);
        assert!(!controller.is_shift_held());

        controller.process_key(KeyCode::ShiftRight, ElementState::Pressed);
        controller.process_key(KeyCode::KeyC, ElementState::Released);
        assert!(controller.is_shift_held());
    }
}
