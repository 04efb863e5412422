//! Backend architecture: gateway, auth, services and data behind one request.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{above, rgb, stage, tool, Category, SceneBlueprint, SceneChoice, Shape, TRACE_COLOR};

const GATEWAY: [f32; 3] = [-2.2, 1.2, 0.0];
const AUTH: [f32; 3] = [0.6, 1.6, 0.0];
const SERVICES: [f32; 3] = [1.6, -0.4, 0.0];
const DATA: [f32; 3] = [-1.0, -1.4, 0.0];

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(4.0)
        .leg("API Gateway to Auth", above(GATEWAY))
        .leg("Auth to Microservices", above(AUTH))
        .leg("Microservices to Data", above(SERVICES))
        .leg("Data Response", above(DATA));

    SceneBlueprint::new(SceneChoice::Category(Category::Backend))
        .with_group(stage(
            "gateway",
            "API Gateway",
            GATEWAY,
            0x1E40AF,
            &[
                tool("REST API", Shape::Cube, 0x3B82F6),
                tool("GraphQL", Shape::Icosahedron, 0xE10098),
                tool("WebSocket", Shape::Sphere, 0x0EA5E9),
            ],
        ))
        .with_group(stage(
            "auth",
            "Authentication & Security",
            AUTH,
            0xB91C1C,
            &[
                tool("JWT Tokens", Shape::Cube, 0xD63AFF),
                tool("OAuth", Shape::Sphere, 0xEB5424),
                tool("Rate Limiting", Shape::Cylinder, 0xF59E0B),
            ],
        ))
        .with_group(stage(
            "services",
            "Microservices",
            SERVICES,
            0x047857,
            &[
                tool("User Service", Shape::Cube, 0x22C55E),
                tool("Payment Service", Shape::Cube, 0x10B981),
                tool("Notification Service", Shape::Cube, 0x14B8A6),
            ],
        ))
        .with_group(stage(
            "data",
            "Data & Messaging",
            DATA,
            0x6D28D9,
            &[
                tool("PostgreSQL", Shape::Cylinder, 0x336791),
                tool("Redis Cache", Shape::Cylinder, 0xDC382D),
                tool("Message Queue", Shape::Cylinder, 0xFF6600),
            ],
        ))
        .with_connector(
            [SERVICES[0] - 0.6, SERVICES[1] + 0.2, 0.0],
            [SERVICES[0] + 0.6, SERVICES[1] + 0.2, 0.0],
            rgb(0x9CA3AF),
        )
        .with_flow(flow, Category::Backend.accent())
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::sine("services", Channel::RotationY, 0.05, 0.5))
        .with_motion(IdleMotion::sine("auth", Channel::PositionY, 0.03, 0.9))
        .with_motion(IdleMotion::sine("data", Channel::RotationZ, 0.02, 0.3))
}
