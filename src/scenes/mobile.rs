//! Mobile development: native and cross-platform toolchains feeding a device.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{
    above, rgb, stage, tool, Category, GroupBlueprint, NodeBlueprint, SceneBlueprint, SceneChoice,
    Shape, TRACE_COLOR,
};

const NATIVE: [f32; 3] = [-2.3, 1.1, 0.0];
const CROSS_PLATFORM: [f32; 3] = [-2.3, -1.1, 0.0];
const BACKEND: [f32; 3] = [2.3, 1.1, 0.0];
const DEVICE: [f32; 3] = [2.3, -1.1, 0.0];
const DISTRIBUTION: [f32; 3] = [0.0, -1.9, 0.4];
const PHONE: [f32; 3] = [0.0, 0.0, 0.0];

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(5.0)
        .leg("Native Build", above(NATIVE))
        .leg("App Runtime", [PHONE[0], PHONE[1] + 0.9, PHONE[2] + 0.3])
        .leg("API Integration", above(BACKEND))
        .leg("Device Features", above(DEVICE))
        .leg("Store Release", above(DISTRIBUTION))
        .leg("Cross-Platform Build", above(CROSS_PLATFORM));

    let phone = GroupBlueprint::new("phone", PHONE)
        .with_node(NodeBlueprint::cube("Mobile App", [0.0, 0.0, 0.0], [0.9, 1.6, 0.12], rgb(0x1F2937)))
        .with_node(
            NodeBlueprint::cube("", [0.0, 0.05, 0.07], [0.78, 1.3, 0.02], rgb(0xA855F7)).with_glow(0.35),
        );

    SceneBlueprint::new(SceneChoice::Category(Category::Mobile))
        .with_group(phone)
        .with_group(stage(
            "native",
            "Native Development",
            NATIVE,
            0x1D4ED8,
            &[
                tool("Swift", Shape::Cube, 0xF05138),
                tool("Kotlin", Shape::Cube, 0x7F52FF),
                tool("Xcode", Shape::Sphere, 0x147EFB),
            ],
        ))
        .with_group(stage(
            "cross-platform",
            "Cross-Platform",
            CROSS_PLATFORM,
            0x0E7490,
            &[
                tool("React Native", Shape::Sphere, 0x61DAFB),
                tool("Flutter", Shape::Icosahedron, 0x02569B),
                tool("Ionic", Shape::Sphere, 0x3880FF),
            ],
        ))
        .with_group(stage(
            "backend",
            "Backend Integration",
            BACKEND,
            0x047857,
            &[
                tool("REST APIs", Shape::Cube, 0x10B981),
                tool("GraphQL", Shape::Icosahedron, 0xE10098),
                tool("WebSocket", Shape::Sphere, 0x0EA5E9),
            ],
        ))
        .with_group(stage(
            "device",
            "Device Capabilities",
            DEVICE,
            0x92400E,
            &[
                tool("GPS", Shape::Sphere, 0x22C55E),
                tool("Camera/ML Kit", Shape::Cylinder, 0xF59E0B),
                tool("Bluetooth/NFC", Shape::Cube, 0x3B82F6),
            ],
        ))
        .with_group(stage(
            "distribution",
            "Testing & Distribution",
            DISTRIBUTION,
            0x6D28D9,
            &[
                tool("TestFlight", Shape::Sphere, 0x0D96F6),
                tool("Play Beta", Shape::Cube, 0x34A853),
                tool("Analytics", Shape::Cylinder, 0xF97316),
            ],
        ))
        .with_flow(flow, Category::Mobile.accent())
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::sine("phone", Channel::RotationY, 0.25, 0.5))
        .with_motion(IdleMotion::sine("phone", Channel::PositionY, 0.05, 0.9))
        .with_motion(IdleMotion::sine("device", Channel::RotationZ, 0.03, 0.4))
}
