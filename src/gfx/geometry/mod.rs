//! # Procedural Geometry Generation
//!
//! Every node in a scene is one of a handful of primitive shapes, generated
//! here as plain vertex/index data. Nothing in this module touches the GPU.
//!
//! ## Supported Primitives
//!
//! - **Cube**: unit cube centred at the origin
//! - **Sphere**: UV sphere of radius 1
//! - **Cylinder**: Y-axis cylinder with caps
//! - **Icosahedron**: solid, optionally subdivided
//! - **Wireframe**: edge list of a subdivided icosahedron
//! - **Starfield**: seeded point cloud in a spherical shell
//!
//! ## Usage
//!
//! ```rust
//! use tech_animation::gfx::geometry::{generate_cube, generate_wireframe};
//!
//! let cube = generate_cube().transformed([1.0, 0.0, 0.0], [0.5, 0.5, 0.5]);
//! let edges = generate_wireframe(1);
//! assert_eq!(cube.triangle_count(), 12);
//! assert!(edges.line_count() > 0);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// How the index buffer of a piece of geometry is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    #[default]
    Triangles,
    Lines,
    Points,
}

impl Topology {
    pub fn primitive_topology(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Topology::Lines => wgpu::PrimitiveTopology::LineList,
            Topology::Points => wgpu::PrimitiveTopology::PointList,
        }
    }
}

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors; zero for unlit lines and points
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl GeometryData {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Default::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::Triangles => self.indices.len() / 3,
            _ => 0,
        }
    }

    pub fn line_count(&self) -> usize {
        match self.topology {
            Topology::Lines => self.indices.len() / 2,
            _ => 0,
        }
    }

    /// Scales by `size` per axis, then moves by `offset`.
    ///
    /// Normals are transformed by the inverse scale and renormalised so
    /// stretched boxes and cylinders still shade correctly.
    pub fn transformed(mut self, offset: [f32; 3], size: [f32; 3]) -> Self {
        for v in &mut self.vertices {
            for axis in 0..3 {
                v[axis] = v[axis] * size[axis] + offset[axis];
            }
        }
        for n in &mut self.normals {
            let mut scaled = [0.0; 3];
            for axis in 0..3 {
                scaled[axis] = if size[axis].abs() > f32::EPSILON {
                    n[axis] / size[axis]
                } else {
                    n[axis]
                };
            }
            let length = (scaled[0] * scaled[0] + scaled[1] * scaled[1] + scaled[2] * scaled[2]).sqrt();
            if length > 0.0 {
                *n = [scaled[0] / length, scaled[1] / length, scaled[2] / length];
            }
        }
        self
    }

    /// Appends `other`, rebasing its indices. Both must share a topology.
    pub fn append(&mut self, other: GeometryData) {
        debug_assert_eq!(self.topology, other.topology);
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.normals.extend(other.normals);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }

    /// Convert to the vertex format used by the renderer
    pub fn to_scene_format(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0; 3]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformed_scales_then_offsets() {
        let cube = generate_cube().transformed([1.0, 2.0, 3.0], [2.0, 4.0, 6.0]);
        let max_x = cube.vertices.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
        let min_y = cube.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        assert!((max_x - 2.0).abs() < 1e-6);
        assert!((min_y - 0.0).abs() < 1e-6);
        for n in &cube.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut lines = GeometryData::new(Topology::Lines);
        lines.vertices = vec![[0.0; 3], [1.0, 0.0, 0.0]];
        lines.normals = vec![[0.0; 3]; 2];
        lines.indices = vec![0, 1];
        let copy = lines.clone();
        lines.append(copy);
        assert_eq!(lines.indices, vec![0, 1, 2, 3]);
        assert_eq!(lines.line_count(), 2);
        assert_eq!(lines.triangle_count(), 0);
    }

    #[test]
    fn test_scene_format_fills_missing_normals() {
        let mut points = GeometryData::new(Topology::Points);
        points.vertices = vec![[1.0, 2.0, 3.0]];
        points.indices = vec![0];
        let (vertices, indices) = points.to_scene_format();
        assert_eq!(vertices[0].normal, [0.0; 3]);
        assert_eq!(indices, vec![0]);
    }
}
