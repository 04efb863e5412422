//! Static scene descriptions
//!
//! A [`SceneBlueprint`] is plain data: groups of shaped nodes, connector
//! segments, an optional flow marker and a list of idle motions. The scene
//! module turns it into GPU objects; the animator reads the flow path and the
//! motions. Blueprints are never changed after construction.

use crate::animation::{flow::FlowPath, motion::IdleMotion};

use super::category::SceneChoice;

/// Name of the scene group that carries the flow marker.
pub const FLOW_MARKER_GROUP: &str = "flow-marker";

/// Name of the static group that holds connector lines.
pub const CONNECTOR_GROUP: &str = "connectors";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Box with edge lengths taken from the node size.
    Cube,
    /// Sphere with radius `size.x`.
    Sphere,
    /// Y-axis cylinder with radius `size.x` and height `size.y`.
    Cylinder,
    /// Solid icosahedron with circumradius `size.x`.
    Icosahedron,
    /// Edge-only icosahedron, subdivided `detail` times.
    Wireframe { detail: u32 },
    /// Point cloud in a spherical shell `[radius, radius + depth]`.
    Starfield { count: u32, radius: f32, depth: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeBlueprint {
    /// Text drawn next to the node; empty for unlabeled decoration.
    pub label: &'static str,
    pub shape: Shape,
    /// Position relative to the owning group.
    pub offset: [f32; 3],
    pub size: [f32; 3],
    pub color: [f32; 3],
    /// Extra light added on top of shading, used for glowing nodes.
    pub glow: f32,
}

impl NodeBlueprint {
    pub fn new(label: &'static str, shape: Shape, offset: [f32; 3], size: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            label,
            shape,
            offset,
            size,
            color,
            glow: 0.0,
        }
    }

    pub fn cube(label: &'static str, offset: [f32; 3], size: [f32; 3], color: [f32; 3]) -> Self {
        Self::new(label, Shape::Cube, offset, size, color)
    }

    pub fn sphere(label: &'static str, offset: [f32; 3], radius: f32, color: [f32; 3]) -> Self {
        Self::new(label, Shape::Sphere, offset, [radius; 3], color)
    }

    pub fn cylinder(label: &'static str, offset: [f32; 3], radius: f32, height: f32, color: [f32; 3]) -> Self {
        Self::new(label, Shape::Cylinder, offset, [radius, height, radius], color)
    }

    pub fn icosahedron(label: &'static str, offset: [f32; 3], radius: f32, color: [f32; 3]) -> Self {
        Self::new(label, Shape::Icosahedron, offset, [radius; 3], color)
    }

    /// Builder pattern: adds emissive glow
    pub fn with_glow(mut self, glow: f32) -> Self {
        self.glow = glow.max(0.0);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBlueprint {
    pub name: &'static str,
    /// Resting position; idle motions are offsets from it.
    pub position: [f32; 3],
    pub nodes: Vec<NodeBlueprint>,
}

impl GroupBlueprint {
    pub fn new(name: &'static str, position: [f32; 3]) -> Self {
        Self {
            name,
            position,
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: NodeBlueprint) -> Self {
        self.nodes.push(node);
        self
    }
}

/// Straight world-space segment between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: [f32; 3],
    pub to: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowMarker {
    pub path: FlowPath,
    pub color: [f32; 3],
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneBlueprint {
    pub choice: SceneChoice,
    pub groups: Vec<GroupBlueprint>,
    pub connectors: Vec<Connector>,
    pub flow: Option<FlowMarker>,
    pub motions: Vec<IdleMotion>,
    pub background: [f32; 3],
}

impl SceneBlueprint {
    pub fn new(choice: SceneChoice) -> Self {
        Self {
            choice,
            groups: Vec::new(),
            connectors: Vec::new(),
            flow: None,
            motions: Vec::new(),
            background: [0.02, 0.03, 0.08],
        }
    }

    pub fn title(&self) -> &'static str {
        self.choice.title()
    }

    pub fn is_default(&self) -> bool {
        self.choice.is_default()
    }

    pub fn with_group(mut self, group: GroupBlueprint) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_connector(mut self, from: [f32; 3], to: [f32; 3], color: [f32; 3]) -> Self {
        self.connectors.push(Connector { from, to, color });
        self
    }

    /// Connects consecutive points with segments of one colour.
    pub fn with_polyline(mut self, points: &[[f32; 3]], color: [f32; 3]) -> Self {
        for pair in points.windows(2) {
            self.connectors.push(Connector {
                from: pair[0],
                to: pair[1],
                color,
            });
        }
        self
    }

    pub fn with_flow(mut self, path: FlowPath, color: [f32; 3]) -> Self {
        self.flow = Some(FlowMarker {
            path,
            color,
            radius: 0.12,
        });
        self
    }

    /// Adds a closed connector loop through the flow marker's waypoints.
    ///
    /// Does nothing when no flow marker has been set yet.
    pub fn with_flow_trace(mut self, color: [f32; 3]) -> Self {
        let Some(flow) = &self.flow else {
            return self;
        };
        let points: Vec<[f32; 3]> = flow.path.waypoints().map(Into::into).collect();
        if points.len() < 2 {
            return self;
        }
        for (i, from) in points.iter().enumerate() {
            self.connectors.push(Connector {
                from: *from,
                to: points[(i + 1) % points.len()],
                color,
            });
        }
        self
    }

    pub fn with_motion(mut self, motion: IdleMotion) -> Self {
        self.motions.push(motion);
        self
    }

    pub fn with_background(mut self, background: [f32; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn group(&self, name: &str) -> Option<&GroupBlueprint> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// World position of a labeled node, for wiring connectors and flow legs.
    pub fn node_position(&self, label: &str) -> Option<[f32; 3]> {
        self.groups.iter().find_map(|group| {
            group.nodes.iter().find(|node| node.label == label).map(|node| {
                [
                    group.position[0] + node.offset[0],
                    group.position[1] + node.offset[1],
                    group.position[2] + node.offset[2],
                ]
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::motion::Channel;
    use crate::scenes::category::Category;

    fn sample() -> SceneBlueprint {
        SceneBlueprint::new(SceneChoice::Category(Category::Backend))
            .with_group(
                GroupBlueprint::new("tier", [1.0, 2.0, 0.0])
                    .with_node(NodeBlueprint::cube("API", [0.5, 0.0, 0.0], [1.0; 3], [1.0, 0.0, 0.0])),
            )
            .with_polyline(&[[0.0; 3], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]], [1.0; 3])
            .with_motion(IdleMotion::sine("tier", Channel::PositionY, 0.1, 1.0))
    }

    #[test]
    fn test_node_position_adds_group_offset() {
        let blueprint = sample();
        assert_eq!(blueprint.node_position("API"), Some([1.5, 2.0, 0.0]));
        assert_eq!(blueprint.node_position("Missing"), None);
    }

    #[test]
    fn test_polyline_splits_into_segments() {
        let blueprint = sample();
        assert_eq!(blueprint.connectors.len(), 2);
        assert_eq!(blueprint.connectors[1].from, [1.0, 0.0, 0.0]);
        assert_eq!(blueprint.connectors[1].to, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_group_lookup_and_title() {
        let blueprint = sample();
        assert!(blueprint.group("tier").is_some());
        assert!(blueprint.group("nope").is_none());
        assert_eq!(blueprint.title(), "Backend Architecture");
        assert!(!blueprint.is_default());
    }

    #[test]
    fn test_glow_is_never_negative() {
        let node = NodeBlueprint::sphere("", [0.0; 3], 1.0, [1.0; 3]).with_glow(-2.0);
        assert_eq!(node.glow, 0.0);
    }
}
