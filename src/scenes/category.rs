//! Technology categories and the selection decision
//!
//! A [`Category`] identifies one of the nine authored scenes. The raw
//! identifier the user picked is kept as a string elsewhere; [`SceneChoice`]
//! is what that string resolves to.

use std::fmt;

/// One of the nine technology domains with an authored scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FullStack,
    AiMl,
    DevOps,
    Mobile,
    Database,
    Web3,
    Cybersecurity,
    Iot,
    Backend,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 9] = [
        Category::FullStack,
        Category::AiMl,
        Category::DevOps,
        Category::Mobile,
        Category::Database,
        Category::Web3,
        Category::Cybersecurity,
        Category::Iot,
        Category::Backend,
    ];

    /// Identifier used on the command line and in export file names.
    pub fn id(self) -> &'static str {
        match self {
            Category::FullStack => "fullstack",
            Category::AiMl => "ai-ml",
            Category::DevOps => "devops",
            Category::Mobile => "mobile",
            Category::Database => "database",
            Category::Web3 => "web3",
            Category::Cybersecurity => "cybersecurity",
            Category::Iot => "iot",
            Category::Backend => "backend",
        }
    }

    /// Title shown on the selector button.
    pub fn title(self) -> &'static str {
        match self {
            Category::FullStack => "Full Stack Development",
            Category::AiMl => "AI & Machine Learning",
            Category::DevOps => "DevOps & Cloud",
            Category::Mobile => "Mobile Development",
            Category::Database => "Database Systems",
            Category::Web3 => "Web3 & Blockchain",
            Category::Cybersecurity => "Cybersecurity",
            Category::Iot => "Internet of Things",
            Category::Backend => "Backend Architecture",
        }
    }

    pub fn description(self) -> String {
        format!(
            "Interactive visualization of {} concepts and workflows",
            self.title().to_lowercase()
        )
    }

    /// Accent colour used for the selector swatch and the flow marker.
    pub fn accent(self) -> [f32; 3] {
        match self {
            Category::FullStack => rgb(0x3B82F6),
            Category::AiMl => rgb(0x10B981),
            Category::DevOps => rgb(0xF97316),
            Category::Mobile => rgb(0xA855F7),
            Category::Database => rgb(0xEAB308),
            Category::Web3 => rgb(0x8B5CF6),
            Category::Cybersecurity => rgb(0xEF4444),
            Category::Iot => rgb(0x06B6D4),
            Category::Backend => rgb(0x22C55E),
        }
    }

    /// Status badge text: the identifier upper-cased with `-` read as a space.
    pub fn badge(self) -> String {
        self.id().to_uppercase().replace('-', " ")
    }

    /// Looks a category up by its exact identifier.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a selected identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChoice {
    Category(Category),
    /// Rotating wireframe with a starfield, shown for unrecognised identifiers.
    Default,
}

impl SceneChoice {
    pub fn resolve(id: &str) -> SceneChoice {
        match Category::from_id(id) {
            Some(category) => SceneChoice::Category(category),
            None => SceneChoice::Default,
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, SceneChoice::Default)
    }

    pub fn category(self) -> Option<Category> {
        match self {
            SceneChoice::Category(category) => Some(category),
            SceneChoice::Default => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneChoice::Category(category) => category.title(),
            SceneChoice::Default => "Tech Universe",
        }
    }

    /// Status badge; the default scene shows its title upper-cased.
    pub fn badge(self) -> String {
        match self {
            SceneChoice::Category(category) => category.badge(),
            SceneChoice::Default => self.title().to_uppercase(),
        }
    }
}

/// Converts a `0xRRGGBB` literal into linear-ish `[r, g, b]` in `0.0..=1.0`.
pub const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_id() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
            assert_eq!(category.to_string(), category.id());
        }
    }

    #[test]
    fn test_from_id_requires_exact_identifier() {
        assert_eq!(Category::from_id("ai-ml"), Some(Category::AiMl));
        assert_eq!(Category::from_id("AI-ML"), None);
        assert_eq!(Category::from_id("  iot "), None);
        assert_eq!(Category::from_id("IoT"), None);
        assert_eq!(Category::from_id("ai ml"), None);
        assert_eq!(Category::from_id(""), None);
    }

    #[test]
    fn test_badge_replaces_hyphen() {
        assert_eq!(Category::AiMl.badge(), "AI ML");
        assert_eq!(Category::Database.badge(), "DATABASE");
        assert_eq!(SceneChoice::Category(Category::AiMl).badge(), "AI ML");
        assert_eq!(SceneChoice::Default.badge(), "TECH UNIVERSE");
    }

    #[test]
    fn test_scene_choice_resolution() {
        assert_eq!(
            SceneChoice::resolve("database"),
            SceneChoice::Category(Category::Database)
        );
        assert!(SceneChoice::resolve("blockchain").is_default());
        assert_eq!(SceneChoice::resolve("nope").category(), None);
    }

    #[test]
    fn test_rgb_decodes_channels() {
        assert_eq!(rgb(0xFF0000), [1.0, 0.0, 0.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0]);
        let c = rgb(0x336791);
        assert!((c[0] - 0x33 as f32 / 255.0).abs() < 1e-6);
        assert!((c[2] - 0x91 as f32 / 255.0).abs() < 1e-6);
    }
}
