//! AI & machine learning: data collection through to deployment.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{above, stage, tool, Category, SceneBlueprint, SceneChoice, Shape, TRACE_COLOR};

const COLLECTION: [f32; 3] = [-2.6, 1.0, 0.0];
const PREPROCESSING: [f32; 3] = [-0.9, 1.4, -0.4];
const TRAINING: [f32; 3] = [0.9, 1.0, 0.0];
const MODEL: [f32; 3] = [1.6, -0.9, 0.0];
const DEPLOYMENT: [f32; 3] = [-1.2, -0.9, 0.0];

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(5.0)
        .leg("Data Collection", above(COLLECTION))
        .leg("Preprocessing", above(PREPROCESSING))
        .leg("Training", above(TRAINING))
        .leg("Model Export", above(MODEL))
        .leg("Deployment", above(DEPLOYMENT));

    SceneBlueprint::new(SceneChoice::Category(Category::AiMl))
        .with_group(stage(
            "collection",
            "Data Collection",
            COLLECTION,
            0x1E40AF,
            &[
                tool("Pandas", Shape::Cube, 0x150458),
                tool("NumPy", Shape::Cube, 0x4DABCF),
            ],
        ))
        .with_group(stage(
            "preprocessing",
            "Preprocessing",
            PREPROCESSING,
            0x92400E,
            &[
                tool("Clean", Shape::Sphere, 0xF59E0B),
                tool("Transform", Shape::Icosahedron, 0x10B981),
            ],
        ))
        .with_group(stage(
            "training",
            "Training",
            TRAINING,
            0x047857,
            &[
                tool("TensorFlow", Shape::Icosahedron, 0xFF6F00),
                tool("PyTorch", Shape::Icosahedron, 0xEE4C2C),
                tool("Neural Net", Shape::Sphere, 0x8B5CF6),
            ],
        ))
        .with_group(stage(
            "model",
            "Model",
            MODEL,
            0x6D28D9,
            &[
                tool("Saved Model", Shape::Cube, 0xA855F7),
                tool("ONNX", Shape::Cube, 0x005CED),
            ],
        ))
        .with_group(stage(
            "deployment",
            "Deployment",
            DEPLOYMENT,
            0xDC2626,
            &[
                tool("FastAPI", Shape::Sphere, 0x009688),
                tool("Docker", Shape::Cube, 0x2496ED),
            ],
        ))
        .with_flow(flow, Category::AiMl.accent())
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::sine("training", Channel::PositionY, 0.05, 1.2))
        .with_motion(IdleMotion::sine("preprocessing", Channel::RotationY, 0.08, 0.6))
        .with_motion(IdleMotion::sine("model", Channel::RotationZ, 0.03, 0.4).with_phase(0.5))
}
