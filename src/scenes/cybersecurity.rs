//! Cybersecurity: a threat moving through detection, control and response.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{
    above, rgb, stage, tool, Category, GroupBlueprint, NodeBlueprint, SceneBlueprint, SceneChoice,
    Shape, TRACE_COLOR,
};

const DETECTION: [f32; 3] = [-2.4, 1.0, 0.0];
const ACCESS: [f32; 3] = [0.0, 1.7, 0.0];
const PROTECTION: [f32; 3] = [2.4, 1.0, 0.0];
const INTELLIGENCE: [f32; 3] = [1.4, -1.3, 0.0];
const RESPONSE: [f32; 3] = [-1.4, -1.3, 0.0];
const PERIMETER: [f32; 3] = [0.0, 0.1, -0.6];

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(4.0)
        .leg("Network Attack", above(DETECTION))
        .leg("Firewall Detection", above(ACCESS))
        .leg("Encryption & Authentication", above(PROTECTION))
        .leg("Threat Analysis", above(INTELLIGENCE))
        .leg("Incident Response", above(RESPONSE));

    let perimeter = GroupBlueprint::new("perimeter", PERIMETER)
        .with_node(NodeBlueprint::new(
            "Perimeter",
            Shape::Wireframe { detail: 1 },
            [0.0, 0.0, 0.0],
            [1.1; 3],
            rgb(0xEF4444),
        ))
        .with_node(NodeBlueprint::sphere("", [0.0, 0.0, 0.0], 0.35, rgb(0x7F1D1D)).with_glow(0.25));

    SceneBlueprint::new(SceneChoice::Category(Category::Cybersecurity))
        .with_group(perimeter)
        .with_group(stage(
            "detection",
            "Threat Detection",
            DETECTION,
            0xB91C1C,
            &[
                tool("Network Scans", Shape::Sphere, 0xF97316),
                tool("IDS/IPS", Shape::Cube, 0xEF4444),
                tool("Honeypots", Shape::Cylinder, 0xEAB308),
            ],
        ))
        .with_group(stage(
            "access",
            "Access Control",
            ACCESS,
            0x1E40AF,
            &[
                tool("MFA", Shape::Cube, 0x3B82F6),
                tool("OAuth/JWT", Shape::Icosahedron, 0x6366F1),
                tool("RBAC", Shape::Cube, 0x0EA5E9),
            ],
        ))
        .with_group(stage(
            "protection",
            "Data Protection",
            PROTECTION,
            0x047857,
            &[
                tool("Encryption at Rest", Shape::Cylinder, 0x10B981),
                tool("TLS/SSL", Shape::Sphere, 0x22C55E),
                tool("Data Masking", Shape::Cube, 0x14B8A6),
            ],
        ))
        .with_group(stage(
            "intelligence",
            "Threat Intelligence",
            INTELLIGENCE,
            0x6D28D9,
            &[
                tool("SIEM", Shape::Cylinder, 0xA855F7),
                tool("Log Analysis", Shape::Cube, 0x8B5CF6),
                tool("ML Detection", Shape::Icosahedron, 0xD946EF),
            ],
        ))
        .with_group(stage(
            "response",
            "Incident Response",
            RESPONSE,
            0x92400E,
            &[
                tool("IR Playbooks", Shape::Cube, 0xF59E0B),
                tool("Alerting", Shape::Sphere, 0xEF4444),
                tool("Forensics", Shape::Icosahedron, 0x64748B),
            ],
        ))
        .with_flow(flow, Category::Cybersecurity.accent())
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::spin("perimeter", Channel::RotationY, 0.3))
        .with_motion(IdleMotion::sine("perimeter", Channel::RotationX, 0.1, 0.4))
        .with_motion(IdleMotion::sine("detection", Channel::PositionY, 0.03, 1.5))
}
