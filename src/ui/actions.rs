//! Commands raised by panels and keyboard shortcuts
//!
//! Panels never touch application state directly. They push [`UiAction`]s
//! that the app applies once the frame has been built, and the keyboard
//! goes through the same path.

use winit::keyboard::KeyCode;

use crate::gfx::camera::CameraAction;
use crate::scenes::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Select(Category),
    TogglePause,
    Reset,
    Export,
    Camera(CameraAction),
    Quit,
}

/// Maps a pressed key to its shortcut.
///
/// Space play/pause, R reset, E export, arrows pan, +/- zoom, 1-9 pick a
/// category, Shift+C reset the camera, Esc quit.
pub fn action_for_key(key: KeyCode, shift: bool) -> Option<UiAction> {
    let action = match key {
        KeyCode::Space => UiAction::TogglePause,
        KeyCode::KeyR => UiAction::Reset,
        KeyCode::KeyE => UiAction::Export,
        KeyCode::KeyC if shift => UiAction::Camera(CameraAction::ResetView),
        KeyCode::ArrowLeft => UiAction::Camera(CameraAction::PanLeft),
        KeyCode::ArrowRight => UiAction::Camera(CameraAction::PanRight),
        KeyCode::ArrowUp => UiAction::Camera(CameraAction::PanUp),
        KeyCode::ArrowDown => UiAction::Camera(CameraAction::PanDown),
        KeyCode::Equal | KeyCode::NumpadAdd => UiAction::Camera(CameraAction::ZoomIn),
        KeyCode::Minus | KeyCode::NumpadSubtract => UiAction::Camera(CameraAction::ZoomOut),
        KeyCode::Escape => UiAction::Quit,
        _ => return category_for_digit(key).map(UiAction::Select),
    };
    Some(action)
}

fn category_for_digit(key: KeyCode) -> Option<Category> {
    let index = match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => 0,
        KeyCode::Digit2 | KeyCode::Numpad2 => 1,
        KeyCode::Digit3 | KeyCode::Numpad3 => 2,
        KeyCode::Digit4 | KeyCode::Numpad4 => 3,
        KeyCode::Digit5 | KeyCode::Numpad5 => 4,
        KeyCode::Digit6 | KeyCode::Numpad6 => 5,
        KeyCode::Digit7 | KeyCode::Numpad7 => 6,
        KeyCode::Digit8 | KeyCode::Numpad8 => 7,
        KeyCode::Digit9 | KeyCode::Numpad9 => 8,
        _ => return None,
    };
    Category::ALL.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_keys() {
        assert_eq!(action_for_key(KeyCode::Space, false), Some(UiAction::TogglePause));
        assert_eq!(action_for_key(KeyCode::KeyR, false), Some(UiAction::Reset));
        assert_eq!(action_for_key(KeyCode::KeyE, true), Some(UiAction::Export));
        assert_eq!(action_for_key(KeyCode::Escape, false), Some(UiAction::Quit));
    }

    #[test]
    fn test_camera_keys() {
        assert_eq!(
            action_for_key(KeyCode::ArrowLeft, false),
            Some(UiAction::Camera(CameraAction::PanLeft))
        );
        assert_eq!(
            action_for_key(KeyCode::Equal, true),
            Some(UiAction::Camera(CameraAction::ZoomIn))
        );
        assert_eq!(
            action_for_key(KeyCode::NumpadSubtract, false),
            Some(UiAction::Camera(CameraAction::ZoomOut))
        );
        assert_eq!(
            action_for_key(KeyCode::KeyC, true),
            Some(UiAction::Camera(CameraAction::ResetView))
        );
        assert_eq!(action_for_key(KeyCode::KeyC, false), None);
    }

    #[test]
    fn test_digits_select_categories_in_order() {
        assert_eq!(
            action_for_key(KeyCode::Digit1, false),
            Some(UiAction::Select(Category::FullStack))
        );
        assert_eq!(
            action_for_key(KeyCode::Numpad5, false),
            Some(UiAction::Select(Category::Database))
        );
        assert_eq!(
            action_for_key(KeyCode::Digit9, false),
            Some(UiAction::Select(Category::Backend))
        );
        assert_eq!(action_for_key(KeyCode::Digit0, false), None);
    }
}
