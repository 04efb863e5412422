//! Full stack: four horizontal layers from the browser down to operations.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{rgb, stage, tool, Category, SceneBlueprint, SceneChoice, Shape, TRACE_COLOR};

const FRONTEND: [f32; 3] = [0.0, 1.8, 0.0];
const BACKEND: [f32; 3] = [0.0, 0.6, 0.0];
const DATABASE: [f32; 3] = [0.0, -0.6, 0.0];
const DEVOPS: [f32; 3] = [0.0, -1.8, 0.0];

pub fn blueprint() -> SceneBlueprint {
    let accent = Category::FullStack.accent();

    let flow = FlowPath::new(6.0)
        .leg("Frontend Processing", [-1.5, 2.25, 0.0])
        .leg("Frontend to Backend", [1.2, 2.25, 0.0])
        .leg("Backend Processing", [1.2, 1.05, 0.0])
        .leg("Backend to Database", [-1.2, 1.05, 0.0])
        .leg("Database Processing", [-1.2, -0.15, 0.0])
        .leg("Response to Frontend", [1.5, -0.15, 0.0]);

    SceneBlueprint::new(SceneChoice::Category(Category::FullStack))
        .with_group(stage(
            "frontend",
            "Frontend",
            FRONTEND,
            0x1E40AF,
            &[
                tool("React", Shape::Sphere, 0x61DAFB),
                tool("Angular", Shape::Cube, 0xDD0031),
                tool("TypeScript", Shape::Cube, 0x3178C6),
                tool("Tailwind", Shape::Icosahedron, 0x06B6D4),
            ],
        ))
        .with_group(stage(
            "backend",
            "Backend",
            BACKEND,
            0x166534,
            &[
                tool("Express", Shape::Cube, 0x68A063),
                tool("Django", Shape::Cube, 0x092E20),
                tool("Spring", Shape::Sphere, 0x6DB33F),
                tool("REST API", Shape::Icosahedron, 0x10B981),
            ],
        ))
        .with_group(stage(
            "database",
            "Database & Cache",
            DATABASE,
            0xB45309,
            &[
                tool("PostgreSQL", Shape::Cylinder, 0x336791),
                tool("MongoDB", Shape::Cylinder, 0x47A248),
                tool("Redis", Shape::Cylinder, 0xDC382D),
                tool("MySQL", Shape::Cylinder, 0x4479A1),
                tool("Elasticsearch", Shape::Cylinder, 0xFEC514),
            ],
        ))
        .with_group(stage(
            "devops",
            "DevOps & Cloud",
            DEVOPS,
            0x3730A3,
            &[
                tool("Docker", Shape::Cube, 0x2496ED),
                tool("Kubernetes", Shape::Icosahedron, 0x326CE5),
                tool("AWS", Shape::Sphere, 0xFF9900),
                tool("Git", Shape::Cube, 0xF05032),
            ],
        ))
        .with_connector(DATABASE, DEVOPS, rgb(0x374151))
        .with_flow(flow, accent)
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::sine("frontend", Channel::RotationY, 0.05, 0.5))
        .with_motion(IdleMotion::sine("backend", Channel::RotationZ, 0.03, 0.3))
        .with_motion(IdleMotion::sine("database", Channel::PositionY, 0.02, 0.4))
        .with_motion(IdleMotion::sine("devops", Channel::RotationX, 0.02, 0.2))
}
