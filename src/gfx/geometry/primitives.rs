//! # Primitive Shape Generation
//!
//! Unit-sized shapes centred at the origin. Callers size and place them with
//! [`GeometryData::transformed`].

use std::collections::HashMap;
use std::f32::consts::PI;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{GeometryData, Topology};

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes, four vertices
/// per face so each face keeps its own outward normal.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new(Topology::Triangles);

    #[rustfmt::skip]
    let positions = [
        // Front face
        [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
        // Back face
        [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
        // Left face
        [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
        // Right face
        [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
        // Top face
        [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
        // Bottom face
        [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
    ];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    data.normals = face_normals.iter().flat_map(|n| [*n; 4]).collect();

    for face in 0..6u32 {
        let base = face * 4;
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a sphere of radius 1.0 centered at the origin.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new(Topology::Triangles);

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let point = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.vertices.push(point);
            data.normals.push(point);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, second, first + 1]);
            data.indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate a Y-axis cylinder of radius 1 and height 1 with both caps.
///
/// Spans `-0.5..=0.5` along Y.
pub fn generate_cylinder(segments: u32) -> GeometryData {
    let mut data = GeometryData::new(Topology::Triangles);

    let segs = segments.max(3);
    let half_height = 0.5;

    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();

        data.vertices.push([cos_a, -half_height, sin_a]);
        data.normals.push([cos_a, 0.0, sin_a]);

        data.vertices.push([cos_a, half_height, sin_a]);
        data.normals.push([cos_a, 0.0, sin_a]);
    }

    for i in 0..segs {
        let bottom_current = i * 2;
        let top_current = bottom_current + 1;
        let bottom_next = (i + 1) * 2;
        let top_next = bottom_next + 1;

        data.indices
            .extend_from_slice(&[bottom_current, top_current, bottom_next]);
        data.indices
            .extend_from_slice(&[top_current, top_next, bottom_next]);
    }

    // Caps get their own rims so their normals stay flat
    for (y, normal_y) in [(-half_height, -1.0), (half_height, 1.0)] {
        let center = data.vertices.len() as u32;
        data.vertices.push([0.0, y, 0.0]);
        data.normals.push([0.0, normal_y, 0.0]);

        for i in 0..=segs {
            let angle = i as f32 * 2.0 * PI / segs as f32;
            let (sin_a, cos_a) = angle.sin_cos();
            data.vertices.push([cos_a, y, sin_a]);
            data.normals.push([0.0, normal_y, 0.0]);
        }

        for i in 0..segs {
            let current = center + 1 + i;
            let next = current + 1;
            if normal_y > 0.0 {
                data.indices.extend_from_slice(&[center, next, current]);
            } else {
                data.indices.extend_from_slice(&[center, current, next]);
            }
        }
    }

    data
}

/// Vertices and faces of an icosahedron on the unit sphere, subdivided
/// `detail` times.
fn icosphere(detail: u32) -> (Vec<[f32; 3]>, Vec<[u32; 3]>) {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;

    let mut vertices: Vec<[f32; 3]> = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
    .into_iter()
    .map(normalize)
    .collect();

    #[rustfmt::skip]
    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    for _ in 0..detail {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut midpoint = |a: u32, b: u32, vertices: &mut Vec<[f32; 3]>| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let (va, vb) = (vertices[a as usize], vertices[b as usize]);
                vertices.push(normalize([
                    (va[0] + vb[0]) * 0.5,
                    (va[1] + vb[1]) * 0.5,
                    (va[2] + vb[2]) * 0.5,
                ]));
                vertices.len() as u32 - 1
            })
        };

        let mut next = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces {
            let ab = midpoint(a, b, &mut vertices);
            let bc = midpoint(b, c, &mut vertices);
            let ca = midpoint(c, a, &mut vertices);
            next.extend_from_slice(&[[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
        }
        faces = next;
    }

    (vertices, faces)
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if length > 0.0 {
        [v[0] / length, v[1] / length, v[2] / length]
    } else {
        v
    }
}

/// Generate a flat-shaded icosahedron with circumradius 1.
pub fn generate_icosahedron(detail: u32) -> GeometryData {
    let (vertices, faces) = icosphere(detail);
    let mut data = GeometryData::new(Topology::Triangles);

    for [a, b, c] in faces {
        let (va, vb, vc) = (vertices[a as usize], vertices[b as usize], vertices[c as usize]);
        let e1 = [vb[0] - va[0], vb[1] - va[1], vb[2] - va[2]];
        let e2 = [vc[0] - va[0], vc[1] - va[1], vc[2] - va[2]];
        let normal = normalize([
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ]);

        let base = data.vertices.len() as u32;
        data.vertices.extend_from_slice(&[va, vb, vc]);
        data.normals.extend_from_slice(&[normal; 3]);
        data.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    data
}

/// Generate the unique edges of a subdivided icosahedron as a line list.
pub fn generate_wireframe(detail: u32) -> GeometryData {
    let (vertices, faces) = icosphere(detail);
    let mut data = GeometryData::new(Topology::Lines);

    let mut edges: Vec<(u32, u32)> = faces
        .iter()
        .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect();
    edges.sort_unstable();
    edges.dedup();

    data.normals = vec![[0.0; 3]; vertices.len()];
    data.vertices = vertices;
    data.indices = edges.into_iter().flat_map(|(a, b)| [a, b]).collect();

    data
}

/// Scatter `count` points uniformly in direction, with distance from the
/// origin in `[radius, radius + depth)`.
///
/// The same seed always yields the same field.
pub fn generate_starfield(count: u32, radius: f32, depth: f32, seed: u64) -> GeometryData {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = GeometryData::new(Topology::Points);

    for i in 0..count {
        let z: f32 = rng.random_range(-1.0..1.0);
        let theta: f32 = rng.random_range(0.0..2.0 * PI);
        let distance = if depth > 0.0 {
            rng.random_range(radius..radius + depth)
        } else {
            radius
        };

        let ring = (1.0 - z * z).max(0.0).sqrt();
        data.vertices.push([
            distance * ring * theta.cos(),
            distance * z,
            distance * ring * theta.sin(),
        ]);
        data.normals.push([0.0; 3]);
        data.indices.push(i);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert!(!sphere.vertices.is_empty());
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert!(sphere.vertices.iter().all(|v| (length(*v) - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_cylinder_is_y_aligned() {
        let cylinder = generate_cylinder(12);
        let max_y = cylinder.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        let min_y = cylinder.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        assert!((max_y - 0.5).abs() < 1e-6);
        assert!((min_y + 0.5).abs() < 1e-6);
        assert!(cylinder.indices.iter().all(|&i| (i as usize) < cylinder.vertices.len()));
    }

    #[test]
    fn test_icosahedron_subdivision() {
        assert_eq!(generate_icosahedron(0).triangle_count(), 20);
        assert_eq!(generate_icosahedron(1).triangle_count(), 80);
        assert!(generate_icosahedron(1)
            .vertices
            .iter()
            .all(|v| (length(*v) - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_wireframe_edge_counts() {
        // V - E + F = 2: 12 - 30 + 20, then 42 - 120 + 80
        assert_eq!(generate_wireframe(0).line_count(), 30);
        assert_eq!(generate_wireframe(1).line_count(), 120);
    }

    #[test]
    fn test_starfield_is_seeded_and_in_shell() {
        let a = generate_starfield(200, 100.0, 50.0, 7);
        let b = generate_starfield(200, 100.0, 50.0, 7);
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.topology, Topology::Points);
        for v in &a.vertices {
            let d = length(*v);
            assert!((99.9..150.1).contains(&d), "star at distance {d}");
        }
    }
}
