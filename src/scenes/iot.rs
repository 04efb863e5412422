//! Internet of things: sensor readings climbing from the edge to analytics.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{above, stage, tool, Category, SceneBlueprint, SceneChoice, Shape, TRACE_COLOR};

const SENSORS: [f32; 3] = [-2.4, -1.4, 0.0];
const EDGE: [f32; 3] = [-1.2, -0.2, 0.0];
const GATEWAY: [f32; 3] = [0.0, 1.0, 0.0];
const CLOUD: [f32; 3] = [1.6, 1.8, -0.2];
const ANALYTICS: [f32; 3] = [2.2, -0.8, 0.0];

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(5.0)
        .leg("Sensors to Edge", above(SENSORS))
        .leg("Edge to Gateway", above(EDGE))
        .leg("Gateway to Cloud", above(GATEWAY))
        .leg("Cloud to Analytics", above(CLOUD))
        .leg("Analytics Feedback", above(ANALYTICS));

    SceneBlueprint::new(SceneChoice::Category(Category::Iot))
        .with_group(stage(
            "sensors",
            "Sensors",
            SENSORS,
            0x0E7490,
            &[
                tool("Temperature", Shape::Cylinder, 0xEF4444),
                tool("Humidity", Shape::Sphere, 0x3B82F6),
                tool("Motion", Shape::Icosahedron, 0x22C55E),
            ],
        ))
        .with_group(stage(
            "edge",
            "Edge Processing",
            EDGE,
            0x166534,
            &[
                tool("Raspberry Pi", Shape::Cube, 0xC51A4A),
                tool("Arduino", Shape::Cube, 0x00979D),
            ],
        ))
        .with_group(stage(
            "gateway",
            "Gateway & Protocol",
            GATEWAY,
            0x92400E,
            &[
                tool("MQTT", Shape::Sphere, 0x660066),
                tool("CoAP", Shape::Sphere, 0xF59E0B),
                tool("LoRaWAN", Shape::Cylinder, 0x1E40AF),
            ],
        ))
        .with_group(stage(
            "cloud",
            "Cloud Processing",
            CLOUD,
            0x1D4ED8,
            &[
                tool("AWS IoT", Shape::Sphere, 0xFF9900),
                tool("Azure IoT Hub", Shape::Sphere, 0x0078D4),
                tool("Google IoT Core", Shape::Sphere, 0x4285F4),
            ],
        ))
        .with_group(stage(
            "analytics",
            "Analytics & AI",
            ANALYTICS,
            0x6D28D9,
            &[
                tool("Stream Processing", Shape::Cylinder, 0x8B5CF6),
                tool("Machine Learning", Shape::Icosahedron, 0x10B981),
                tool("Predictive Analytics", Shape::Cube, 0xEC4899),
            ],
        ))
        .with_flow(flow, Category::Iot.accent())
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::sine("sensors", Channel::PositionY, 0.04, 2.0))
        .with_motion(IdleMotion::sine("cloud", Channel::PositionY, 0.06, 0.5).with_phase(0.7))
        .with_motion(IdleMotion::sine("gateway", Channel::RotationY, 0.05, 0.6))
}
