//! Viewer panels
//!
//! Three fixed windows (category selector, playback controls and the camera
//! overlay) plus node labels drawn straight onto the background. Panels read
//! a [`PanelStatus`] snapshot and report clicks as [`UiAction`]s.

use imgui::{Condition, StyleColor};

use crate::{
    animation::{AnimationManager, Playback},
    gfx::{camera::CameraAction, scene::Scene},
    scenes::{Category, SceneChoice},
};

use super::actions::UiAction;

const MARGIN: f32 = 20.0;
const SELECTOR_WIDTH: f32 = 360.0;
const PLAYBACK_WIDTH: f32 = 420.0;
const LABEL_COLOR: [f32; 4] = [0.92, 0.94, 0.98, 0.95];
const BADGE_COLOR: [f32; 4] = [0.55, 0.75, 1.0, 1.0];
const LIVE_COLOR: [f32; 4] = [0.2, 0.85, 0.45, 1.0];
const PAUSED_COLOR: [f32; 4] = [0.95, 0.7, 0.2, 1.0];

/// What the panels show this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStatus {
    pub choice: SceneChoice,
    pub title: &'static str,
    pub badge: String,
    pub description: String,
    pub playback: Playback,
    pub flow: Option<String>,
}

impl PanelStatus {
    pub fn from_manager(manager: &AnimationManager) -> Self {
        let choice = manager.choice();
        let description = match choice {
            SceneChoice::Category(category) => category.description(),
            SceneChoice::Default => "Pick a technology to explore its architecture".to_string(),
        };
        Self {
            choice,
            title: choice.title(),
            badge: choice.badge(),
            description,
            playback: manager.playback(),
            flow: manager.flow_status(),
        }
    }
}

/// A label already projected to window pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLabel {
    pub text: &'static str,
    pub position: [f32; 2],
}

/// Projects every visible label in `scene` onto a `width x height` window.
///
/// Labels behind the camera or off screen are dropped.
pub fn project_labels(scene: &Scene, width: f32, height: f32) -> Vec<ScreenLabel> {
    let camera = &scene.camera_manager.camera;
    scene
        .labels()
        .filter_map(|(text, world)| {
            let [x, y] = camera.project_to_screen(world, width, height)?;
            let on_screen = (0.0..=width).contains(&x) && (0.0..=height).contains(&y);
            on_screen.then_some(ScreenLabel { text, position: [x, y] })
        })
        .collect()
}

/// Builds every panel for one frame.
pub fn viewer_ui(ui: &imgui::Ui, status: &PanelStatus, labels: &[ScreenLabel], actions: &mut Vec<UiAction>) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    label_overlay(ui, labels);
    selector_panel(ui, status, actions);
    playback_panel(ui, status, display_size, actions);
    camera_overlay(ui, display_size, actions);
}

fn label_overlay(ui: &imgui::Ui, labels: &[ScreenLabel]) {
    let draw_list = ui.get_background_draw_list();
    for label in labels {
        let size = ui.calc_text_size(label.text);
        let origin = [label.position[0] - size[0] * 0.5, label.position[1] - size[1]];
        draw_list.add_text(origin, LABEL_COLOR, label.text);
    }
}

fn selector_panel(ui: &imgui::Ui, status: &PanelStatus, actions: &mut Vec<UiAction>) {
    ui.window("Technologies")
        .position([MARGIN, MARGIN], Condition::FirstUseEver)
        .size([SELECTOR_WIDTH, 0.0], Condition::FirstUseEver)
        .always_auto_resize(true)
        .collapsible(true)
        .build(|| {
            for (i, category) in Category::ALL.into_iter().enumerate() {
                let selected = status.choice == SceneChoice::Category(category);
                let [r, g, b] = category.accent();
                ui.text_colored([r, g, b, 1.0], format!("{}", i + 1));
                ui.same_line();
                if ui.selectable_config(category.title()).selected(selected).build() && !selected {
                    actions.push(UiAction::Select(category));
                }
            }
            ui.separator();
            ui.text_wrapped(&status.description);
        });
}

fn playback_panel(ui: &imgui::Ui, status: &PanelStatus, display_size: [f32; 2], actions: &mut Vec<UiAction>) {
    let x = (display_size[0] - PLAYBACK_WIDTH - MARGIN).max(MARGIN);

    ui.window("Animation")
        .position([x, MARGIN], Condition::FirstUseEver)
        .size([PLAYBACK_WIDTH, 0.0], Condition::FirstUseEver)
        .always_auto_resize(true)
        .collapsible(true)
        .build(|| {
            ui.text_colored(BADGE_COLOR, &status.badge);
            ui.same_line();
            let state_color = if status.playback.is_paused() {
                PAUSED_COLOR
            } else {
                LIVE_COLOR
            };
            ui.text_colored(state_color, status.playback.status_label());

            ui.text(status.title);
            if let Some(flow) = &status.flow {
                ui.text_disabled(flow);
            }
            ui.separator();

            if ui.button(status.playback.toggle_label()) {
                actions.push(UiAction::TogglePause);
            }
            ui.same_line();
            if ui.button("Reset") {
                actions.push(UiAction::Reset);
            }
            ui.same_line();
            let _export_color = ui.push_style_color(StyleColor::Button, [0.15, 0.45, 0.85, 1.0]);
            if ui.button("Export PDF") {
                actions.push(UiAction::Export);
            }
        });
}

fn camera_overlay(ui: &imgui::Ui, display_size: [f32; 2], actions: &mut Vec<UiAction>) {
    let y = (display_size[1] - 220.0 - MARGIN).max(MARGIN);

    ui.window("Camera")
        .position([MARGIN, y], Condition::FirstUseEver)
        .always_auto_resize(true)
        .collapsible(true)
        .build(|| {
            let mut button = |action: CameraAction| {
                if ui.button(action.label()) {
                    actions.push(UiAction::Camera(action));
                }
            };

            button(CameraAction::ZoomIn);
            ui.same_line();
            button(CameraAction::ZoomOut);

            button(CameraAction::PanUp);
            button(CameraAction::PanLeft);
            ui.same_line();
            button(CameraAction::PanRight);
            button(CameraAction::PanDown);

            ui.separator();
            button(CameraAction::ResetView);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::CameraManager;

    #[test]
    fn test_status_snapshot() {
        let mut scene = Scene::new(CameraManager::default());
        let mut manager = AnimationManager::new("ai-ml", false);
        manager.load_current(&mut scene);
        manager.update(0.4, &mut scene);

        let status = PanelStatus::from_manager(&manager);
        assert_eq!(status.badge, "AI ML");
        assert_eq!(status.title, "AI & Machine Learning");
        assert_eq!(status.playback.status_label(), "Live Animation");
        assert!(status.flow.as_deref().is_some_and(|flow| flow.starts_with("Phase 1/")));

        manager.toggle_pause();
        let status = PanelStatus::from_manager(&manager);
        assert_eq!(status.playback.status_label(), "Paused");
        assert_eq!(status.playback.toggle_label(), "Play");
    }

    #[test]
    fn test_default_status() {
        let manager = AnimationManager::new("unknown", false);
        let status = PanelStatus::from_manager(&manager);
        assert_eq!(status.choice, SceneChoice::Default);
        assert!(status.flow.is_none());
    }

    #[test]
    fn test_labels_project_inside_window() {
        let mut scene = Scene::new(CameraManager::default());
        let mut manager = AnimationManager::new("database", false);
        manager.load_current(&mut scene);
        scene.update();

        let labels = project_labels(&scene, 1200.0, 800.0);
        assert!(!labels.is_empty());
        for label in &labels {
            assert!((0.0..=1200.0).contains(&label.position[0]));
            assert!((0.0..=800.0).contains(&label.position[1]));
        }
    }
}
