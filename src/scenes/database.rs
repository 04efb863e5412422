//! Database systems: a request travelling through cache, engine and storage.

use crate::animation::{
    flow::FlowPath,
    motion::{Channel, IdleMotion},
};

use super::{above, rgb, stage, tool, Category, SceneBlueprint, SceneChoice, Shape, TRACE_COLOR};

const APPLICATION: [f32; 3] = [-2.4, 1.0, 0.0];
const CACHE: [f32; 3] = [-0.8, 1.0, 0.0];
const ENGINES: [f32; 3] = [-0.8, -1.0, 0.0];
const STORAGE: [f32; 3] = [1.2, -1.0, 0.0];
const RESPONSE: [f32; 3] = [1.2, 1.0, 0.0];

/// Loop period of the query flow, in seconds.
pub const QUERY_PERIOD: f32 = 5.0;

pub fn blueprint() -> SceneBlueprint {
    let flow = FlowPath::new(QUERY_PERIOD)
        .leg("Cache Check", above(APPLICATION))
        .leg("Database Query", above(CACHE))
        .leg("Data Retrieval", above(ENGINES))
        .leg("Response Cache", above(STORAGE))
        .leg("Application Response", above(RESPONSE));

    SceneBlueprint::new(SceneChoice::Category(Category::Database))
        .with_group(stage(
            "application",
            "Application Layer",
            APPLICATION,
            0x1E40AF,
            &[
                tool("REST API", Shape::Sphere, 0x3B82F6),
                tool("GraphQL", Shape::Icosahedron, 0xE10098),
                tool("ORM", Shape::Cube, 0x6366F1),
            ],
        ))
        .with_group(stage(
            "cache",
            "Caching Layer",
            CACHE,
            0xB91C1C,
            &[
                tool("Redis", Shape::Cylinder, 0xDC382D),
                tool("Memcached", Shape::Cylinder, 0x22C55E),
                tool("CDN", Shape::Sphere, 0xF97316),
            ],
        ))
        .with_group(stage(
            "engines",
            "Database Engines",
            ENGINES,
            0x166534,
            &[
                tool("PostgreSQL", Shape::Cylinder, 0x336791),
                tool("MongoDB", Shape::Cylinder, 0x47A248),
                tool("MySQL", Shape::Cylinder, 0x4479A1),
            ],
        ))
        .with_group(stage(
            "storage",
            "Storage & Indexing",
            STORAGE,
            0x92400E,
            &[
                tool("Tables", Shape::Cube, 0xEAB308),
                tool("Documents", Shape::Cube, 0xA855F7),
                tool("Indexes", Shape::Icosahedron, 0x06B6D4),
            ],
        ))
        .with_group(stage(
            "response",
            "Response & Caching",
            RESPONSE,
            0x047857,
            &[
                tool("JSON", Shape::Cube, 0x10B981),
                tool("HTTP Cache", Shape::Sphere, 0x0EA5E9),
                tool("Pagination", Shape::Cube, 0x64748B),
            ],
        ))
        .with_flow(flow, rgb(0x06B6D4))
        .with_flow_trace(TRACE_COLOR)
        .with_motion(IdleMotion::sine("cache", Channel::PositionY, 0.03, 0.8))
        .with_motion(IdleMotion::sine("engines", Channel::RotationY, 0.04, 0.4))
        .with_motion(IdleMotion::sine("storage", Channel::PositionY, 0.02, 0.5).with_phase(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3};

    #[test]
    fn test_query_flow_starts_with_cache_check() {
        let blueprint = blueprint();
        let flow = blueprint.flow.unwrap();
        assert_eq!(flow.path.period(), QUERY_PERIOD);
        assert_eq!(flow.path.phase_count(), 5);

        let sample = flow.path.sample(0.5).unwrap();
        assert_eq!(sample.phase_number(), 1);
        assert_eq!(sample.leg, "Cache Check");
        assert!((sample.progress - 0.5).abs() < 1e-5);

        // halfway between the application and cache stages
        let expected = (Vector3::from(above(APPLICATION)) + Vector3::from(above(CACHE))) * 0.5;
        assert!((sample.position - expected).magnitude() < 1e-5);
    }
}
