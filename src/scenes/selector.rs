//! Maps a category identifier to the scene blueprint that illustrates it.

use super::{
    ai_ml, backend, category::SceneChoice, cybersecurity, database, default, devops, fullstack, iot, mobile,
    web3, Category, SceneBlueprint,
};

/// Builds the scene for `id`, falling back to the decorative default scene
/// when the identifier is not a known category.
pub fn select_scene(id: &str) -> SceneBlueprint {
    let choice = SceneChoice::resolve(id);
    if choice.is_default() {
        log::debug!("No scene for category '{}', using default", id);
    }
    blueprint_for(choice)
}

pub fn blueprint_for(choice: SceneChoice) -> SceneBlueprint {
    match choice {
        SceneChoice::Category(Category::FullStack) => fullstack::blueprint(),
        SceneChoice::Category(Category::AiMl) => ai_ml::blueprint(),
        SceneChoice::Category(Category::DevOps) => devops::blueprint(),
        SceneChoice::Category(Category::Mobile) => mobile::blueprint(),
        SceneChoice::Category(Category::Database) => database::blueprint(),
        SceneChoice::Category(Category::Web3) => web3::blueprint(),
        SceneChoice::Category(Category::Cybersecurity) => cybersecurity::blueprint(),
        SceneChoice::Category(Category::Iot) => iot::blueprint(),
        SceneChoice::Category(Category::Backend) => backend::blueprint(),
        SceneChoice::Default => default::blueprint(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{rgb, Shape};

    #[test]
    fn test_every_known_id_selects_its_scene() {
        for category in Category::ALL {
            let scene = select_scene(category.id());
            assert_eq!(scene.choice, SceneChoice::Category(category));
            assert!(!scene.is_default());
            assert_eq!(scene.title(), category.title());
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_default() {
        for id in ["", "quantum", "full stack", "   "] {
            let scene = select_scene(id);
            assert!(scene.is_default(), "'{id}' should fall back");
            assert!(scene.flow.is_none());
        }
    }

    #[test]
    fn test_default_scene_contents() {
        let scene = blueprint_for(SceneChoice::Default);
        assert_eq!(scene.title(), "Tech Universe");
        let stars = scene.group("starfield").expect("starfield group");
        assert_eq!(
            stars.nodes[0].shape,
            Shape::Starfield {
                count: 5000,
                radius: 100.0,
                depth: 50.0
            }
        );
        let wire = scene.group("wireframe").expect("wireframe group");
        assert_eq!(wire.nodes[0].color, rgb(0x6366F1));
        for motion in &scene.motions {
            assert!(scene.group(motion.group).is_some());
        }
    }

    #[test]
    fn test_selection_only_matches_exact_identifiers() {
        assert_eq!(select_scene("database").choice, SceneChoice::Category(Category::Database));
        assert!(select_scene("DATABASE").is_default());
        assert!(select_scene(" database ").is_default());
    }
}
