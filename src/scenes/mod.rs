//! # Scenes
//!
//! Hand-authored diagram scenes, one module per technology category plus the
//! decorative fallback. Each module exposes a single `blueprint()` function;
//! [`select_scene`] picks one by identifier.
//!
//! Most category scenes are built from *stages*: a flat slab carrying a row of
//! tool nodes. The flow marker travels from stage to stage and the connector
//! trace follows its loop.

pub mod blueprint;
pub mod category;
pub mod selector;

mod ai_ml;
mod backend;
mod cybersecurity;
mod database;
mod default;
mod devops;
mod fullstack;
mod iot;
mod mobile;
mod web3;

pub use blueprint::{
    Connector, FlowMarker, GroupBlueprint, NodeBlueprint, SceneBlueprint, Shape, CONNECTOR_GROUP,
    FLOW_MARKER_GROUP,
};
pub use category::{rgb, Category, SceneChoice};
pub use selector::{blueprint_for, select_scene};

/// Horizontal distance between tool nodes on a stage.
const TOOL_SPACING: f32 = 0.6;

/// Colour of connector traces.
const TRACE_COLOR: [f32; 3] = rgb(0x6B7280);

/// One tool node on a stage.
#[derive(Debug, Clone, Copy)]
struct Tool {
    label: &'static str,
    shape: Shape,
    color: u32,
}

const fn tool(label: &'static str, shape: Shape, color: u32) -> Tool {
    Tool {
        label,
        shape,
        color,
    }
}

fn tool_size(shape: Shape) -> [f32; 3] {
    match shape {
        Shape::Cube => [0.28; 3],
        Shape::Sphere => [0.16; 3],
        Shape::Cylinder => [0.14, 0.32, 0.14],
        _ => [0.18; 3],
    }
}

/// Builds a stage group centred on `position`.
///
/// The slab carries the stage title as its label and sits just below the
/// tools, which are spread evenly along X.
fn stage(name: &'static str, title: &'static str, position: [f32; 3], accent: u32, tools: &[Tool]) -> GroupBlueprint {
    let count = tools.len().max(1) as f32;
    let slab_width = count * TOOL_SPACING + 0.2;

    let mut group = GroupBlueprint::new(name, position).with_node(NodeBlueprint::cube(
        title,
        [0.0, -0.26, 0.0],
        [slab_width, 0.06, 0.6],
        rgb(accent),
    ));

    for (i, tool) in tools.iter().enumerate() {
        let x = (i as f32 - (count - 1.0) * 0.5) * TOOL_SPACING;
        group = group.with_node(NodeBlueprint::new(
            tool.label,
            tool.shape,
            [x, 0.0, 0.0],
            tool_size(tool.shape),
            rgb(tool.color),
        ));
    }

    group
}

/// Point hovering above a stage, where flow legs start.
fn above(position: [f32; 3]) -> [f32; 3] {
    [position[0], position[1] + 0.45, position[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_centres_tools() {
        let group = stage(
            "s",
            "Stage",
            [0.0, 0.0, 0.0],
            0x000000,
            &[
                tool("A", Shape::Cube, 0xFF0000),
                tool("B", Shape::Sphere, 0x00FF00),
                tool("C", Shape::Cylinder, 0x0000FF),
            ],
        );
        assert_eq!(group.nodes.len(), 4);
        assert_eq!(group.nodes[0].label, "Stage");
        assert!((group.nodes[1].offset[0] + TOOL_SPACING).abs() < 1e-6);
        assert!(group.nodes[2].offset[0].abs() < 1e-6);
        assert!((group.nodes[3].offset[0] - TOOL_SPACING).abs() < 1e-6);
    }

    #[test]
    fn test_every_category_scene_is_well_formed() {
        for category in Category::ALL {
            let blueprint = blueprint_for(SceneChoice::Category(category));
            assert_eq!(blueprint.choice, SceneChoice::Category(category));
            assert!(!blueprint.groups.is_empty(), "{category} has no groups");
            assert!(!blueprint.connectors.is_empty(), "{category} has no connectors");

            let flow = blueprint
                .flow
                .as_ref()
                .unwrap_or_else(|| panic!("{category} has no flow marker"));
            assert!(flow.path.phase_count() >= 4, "{category} loop is too short");
            assert!(
                (4.0..=6.0).contains(&flow.path.period()),
                "{category} period out of range"
            );

            for motion in &blueprint.motions {
                assert!(
                    blueprint.group(motion.group).is_some(),
                    "{category} animates missing group {}",
                    motion.group
                );
            }

            let mut names: Vec<_> = blueprint.groups.iter().map(|g| g.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), blueprint.groups.len(), "{category} repeats a group name");
            assert!(!names.contains(&FLOW_MARKER_GROUP));
            assert!(!names.contains(&CONNECTOR_GROUP));
        }
    }
}
