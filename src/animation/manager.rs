//! Animation manager
//!
//! Owns what the viewer is currently showing: the selected category, the
//! animator built from its blueprint and the play/pause state. Frame,
//! keyboard and UI handlers all go through it.

use crate::{
    gfx::scene::Scene,
    scenes::{select_scene, SceneChoice},
};

use super::{animator::Animator, playback::Playback};

/// Prefix of every exported document name.
pub const EXPORT_PREFIX: &str = "tech-animation";

pub struct AnimationManager {
    selected: String,
    choice: SceneChoice,
    animator: Animator,
    playback: Playback,
}

impl AnimationManager {
    /// Create a manager that has not loaded anything into a scene yet
    ///
    /// # Arguments
    /// * `category` - Identifier to show first; unknown ids show the default scene
    /// * `paused` - Whether to start paused
    pub fn new(category: &str, paused: bool) -> Self {
        Self {
            selected: category.to_string(),
            choice: SceneChoice::resolve(category),
            animator: Animator::default(),
            playback: Playback::from(paused),
        }
    }

    /// Replaces the scene contents with the blueprint for `category`
    ///
    /// The pause state carries over. GPU resources for the new objects still
    /// have to be created by the caller.
    pub fn select(&mut self, category: &str, scene: &mut Scene) {
        let blueprint = select_scene(category);
        scene.load_blueprint(&blueprint);

        self.selected = category.to_string();
        self.choice = blueprint.choice;
        self.animator = Animator::from_blueprint(&blueprint);
        log::info!("Selected '{}' ({})", self.selected, blueprint.title());
    }

    /// Reloads the current selection, e.g. on startup
    pub fn load_current(&mut self, scene: &mut Scene) {
        let selected = self.selected.clone();
        self.select(&selected, scene);
    }

    /// Update animation (called every frame)
    ///
    /// # Arguments
    /// * `elapsed` - Seconds since the viewer started
    /// * `scene` - Scene whose transforms are posed
    pub fn update(&mut self, elapsed: f32, scene: &mut Scene) -> bool {
        self.animator.update(elapsed, self.playback.is_paused(), scene)
    }

    pub fn toggle_pause(&mut self) -> Playback {
        let state = self.playback.toggle();
        log::info!("Animation {}", if state.is_paused() { "paused" } else { "resumed" });
        state
    }

    /// Clears the pause state. The clock is not rewound.
    pub fn reset(&mut self) {
        self.playback.reset();
        log::info!("Animation reset");
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.playback = Playback::from(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn selected_id(&self) -> &str {
        &self.selected
    }

    pub fn choice(&self) -> SceneChoice {
        self.choice
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Current flow leg for the status panel, if the scene has a marker
    pub fn flow_status(&self) -> Option<String> {
        self.animator.flow_status()
    }

    /// `tech-animation-<selected>.pdf`
    pub fn export_file_name(&self) -> String {
        crate::export::file_name(EXPORT_PREFIX, &self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::CameraManager;
    use crate::scenes::{Category, FLOW_MARKER_GROUP};

    fn scene() -> Scene {
        Scene::new(CameraManager::default())
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut manager = AnimationManager::new("database", false);
        assert!(!manager.is_paused());
        assert_eq!(manager.toggle_pause(), Playback::Paused);
        assert_eq!(manager.toggle_pause(), Playback::Playing);

        manager.set_paused(true);
        manager.reset();
        assert!(!manager.is_paused());
    }

    #[test]
    fn test_select_loads_scene_and_keeps_pause() {
        let mut scene = scene();
        let mut manager = AnimationManager::new("fullstack", true);
        manager.load_current(&mut scene);
        assert_eq!(manager.choice(), SceneChoice::Category(Category::FullStack));

        manager.select("iot", &mut scene);
        assert!(manager.is_paused());
        assert_eq!(manager.selected_id(), "iot");
        assert!(scene.find_object("sensors").is_some());
        assert!(scene.find_object("frontend").is_none());
    }

    #[test]
    fn test_paused_update_keeps_marker_at_start() {
        let mut scene = scene();
        let mut manager = AnimationManager::new("backend", true);
        manager.load_current(&mut scene);
        let start = scene.find_object(FLOW_MARKER_GROUP).expect("marker").transform.translation;

        assert!(!manager.update(2.2, &mut scene));
        assert_eq!(
            scene.find_object(FLOW_MARKER_GROUP).expect("marker").transform.translation,
            start
        );
        assert!(manager.flow_status().is_none());

        manager.toggle_pause();
        assert!(manager.update(2.2, &mut scene));
        assert!(manager.flow_status().is_some());
    }

    #[test]
    fn test_unknown_selection_uses_default_scene() {
        let mut scene = scene();
        let mut manager = AnimationManager::new("quantum", false);
        manager.load_current(&mut scene);
        assert_eq!(manager.choice(), SceneChoice::Default);
        assert_eq!(manager.export_file_name(), "tech-animation-quantum.pdf");
    }

    #[test]
    fn test_near_miss_identifier_is_not_a_category() {
        let mut scene = scene();
        let mut manager = AnimationManager::new("DATABASE", false);
        manager.load_current(&mut scene);
        assert_eq!(manager.choice(), SceneChoice::Default);
        assert!(scene.find_object("cache").is_none());
        assert_eq!(manager.export_file_name(), "tech-animation-DATABASE.pdf");
    }

    #[test]
    fn test_export_name_follows_selection() {
        let mut scene = scene();
        let mut manager = AnimationManager::new("fullstack", false);
        manager.select("ai-ml", &mut scene);
        assert_eq!(manager.export_file_name(), "tech-animation-ai-ml.pdf");
    }
}
