//! Fallback scene: a slow starfield around a wireframe icosahedron.

use crate::animation::motion::{Channel, IdleMotion};

use super::{rgb, GroupBlueprint, NodeBlueprint, SceneBlueprint, SceneChoice, Shape};

pub fn blueprint() -> SceneBlueprint {
    let stars = GroupBlueprint::new("starfield", [0.0; 3]).with_node(NodeBlueprint::new(
        "",
        Shape::Starfield {
            count: 5000,
            radius: 100.0,
            depth: 50.0,
        },
        [0.0; 3],
        [1.0; 3],
        [0.9, 0.92, 1.0],
    ));

    let wireframe = GroupBlueprint::new("wireframe", [0.0; 3]).with_node(NodeBlueprint::new(
        "",
        Shape::Wireframe { detail: 1 },
        [0.0; 3],
        [1.0; 3],
        rgb(0x6366F1),
    ));

    SceneBlueprint::new(SceneChoice::Default)
        .with_group(stars)
        .with_group(wireframe)
        .with_background([0.0, 0.0, 0.02])
        .with_motion(IdleMotion::spin("starfield", Channel::RotationY, 0.02))
        .with_motion(IdleMotion::spin("wireframe", Channel::RotationX, 0.3))
        .with_motion(IdleMotion::spin("wireframe", Channel::RotationY, 0.2))
}
