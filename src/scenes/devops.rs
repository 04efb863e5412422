//! DevOps & cloud: a six-stage delivery pipeline laid out as a ring.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{above, stage, tool, Category, SceneBlueprint, SceneChoice, Shape, TRACE_COLOR};

const DEVELOPMENT: [f32; 3] = [-2.2, 1.2, 0.0];
const BUILD: [f32; 3] = [0.0, 1.7, -0.3];
const TESTING: [f32; 3] = [2.2, 1.2, 0.0];
const DEPLOY: [f32; 3] = [2.2, -1.0, 0.0];
const MONITOR: [f32; 3] = [0.0, -1.5, -0.3];
const SECURITY: [f32; 3] = [-2.2, -1.0, 0.0];

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(6.0)
        .leg("Code Commit", above(DEVELOPMENT))
        .leg("Build & Package", above(BUILD))
        .leg("Testing & Quality", above(TESTING))
        .leg("Deploy & Infrastructure", above(DEPLOY))
        .leg("Monitor & Observe", above(MONITOR))
        .leg("Security & Feedback", above(SECURITY));

    SceneBlueprint::new(SceneChoice::Category(Category::DevOps))
        .with_group(stage(
            "development",
            "Development",
            DEVELOPMENT,
            0xB91C1C,
            &[
                tool("Git", Shape::Cube, 0xF05032),
                tool("VS Code", Shape::Cube, 0x007ACC),
                tool("GitHub Actions", Shape::Sphere, 0x2088FF),
            ],
        ))
        .with_group(stage(
            "build",
            "Build & Package",
            BUILD,
            0x1D4ED8,
            &[
                tool("Docker", Shape::Cube, 0x2496ED),
                tool("Jenkins", Shape::Sphere, 0xD24939),
                tool("Gradle", Shape::Cylinder, 0x02303A),
            ],
        ))
        .with_group(stage(
            "testing",
            "Testing & Quality",
            TESTING,
            0x047857,
            &[
                tool("Jest", Shape::Sphere, 0xC21325),
                tool("SonarQube", Shape::Icosahedron, 0x4E9BCD),
                tool("Coverage", Shape::Cube, 0x22C55E),
            ],
        ))
        .with_group(stage(
            "deploy",
            "Deploy & Infra",
            DEPLOY,
            0x1E40AF,
            &[
                tool("Kubernetes", Shape::Icosahedron, 0x326CE5),
                tool("AWS/GCP", Shape::Sphere, 0xFF9900),
                tool("Terraform", Shape::Cube, 0x7B42BC),
            ],
        ))
        .with_group(stage(
            "monitor",
            "Monitor & Observe",
            MONITOR,
            0x6D28D9,
            &[
                tool("Grafana", Shape::Sphere, 0xF46800),
                tool("Prometheus", Shape::Cylinder, 0xE6522C),
                tool("ELK Stack", Shape::Cylinder, 0x005571),
            ],
        ))
        .with_group(stage(
            "security",
            "Security & Feedback",
            SECURITY,
            0x92400E,
            &[
                tool("SAST/DAST", Shape::Icosahedron, 0xEF4444),
                tool("Vault", Shape::Cube, 0xFFD814),
                tool("Slack/Jira", Shape::Sphere, 0x4A154B),
            ],
        ))
        .with_flow(flow, Category::DevOps.accent())
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::sine("build", Channel::RotationY, 0.06, 0.7))
        .with_motion(IdleMotion::sine("deploy", Channel::PositionY, 0.04, 0.5))
        .with_motion(IdleMotion::sine("monitor", Channel::RotationX, 0.03, 0.3).with_phase(1.5))
}
