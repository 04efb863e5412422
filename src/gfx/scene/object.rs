//! Scene objects
//!
//! An [`Object`] is one blueprint group: a set of meshes sharing a single
//! model transform. Meshes carry the node offsets and sizes baked into their
//! vertices, so animating a group only ever rewrites one small uniform.

use cgmath::{Matrix4, Rad, SquareMatrix, Vector3, Vector4, Zero};
use wgpu::{util::DeviceExt, Device};

use crate::{
    gfx::{
        geometry::{GeometryData, Topology},
        resources::material::{MaterialId, MaterialManager},
    },
    wgpu_utils::{BindGroupBuilder, BindGroupLayoutWithDesc, UniformBuffer},
};

use super::vertex::Vertex3D;

/// Translation, Euler rotation (radians, applied X then Y then Z) and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn at(translation: Vector3<f32>) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Model matrix: `T * Rx * Ry * Rz * S`
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translation)
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Maps a point from object space into world space.
    pub fn apply(&self, local: Vector3<f32>) -> Vector3<f32> {
        let world = self.matrix() * Vector4::new(local.x, local.y, local.z, 1.0);
        world.truncate()
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
}

impl From<&Transform> for TransformUniform {
    fn from(transform: &Transform) -> Self {
        Self {
            model: transform.matrix().into(),
        }
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self {
            model: Matrix4::identity().into(),
        }
    }
}

pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    topology: Topology,
    material_id: MaterialId,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    pub index_count: u32,
}

impl Mesh {
    pub fn from_geometry(geometry: &GeometryData, material_id: &str) -> Self {
        let (vertices, indices) = geometry.to_scene_format();
        Self {
            index_count: indices.len() as u32,
            vertices,
            indices,
            topology: geometry.topology,
            material_id: material_id.to_string(),
            vertex_buffer: None,
            index_buffer: None,
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn material_id(&self) -> &MaterialId {
        &self.material_id
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    fn init_gpu_resources(&mut self, device: &Device) {
        if self.index_count == 0 {
            return;
        }

        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

/// A text tag attached to a point in object space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub offset: Vector3<f32>,
}

pub struct ObjectGpuResources {
    transform_ubo: UniformBuffer<TransformUniform>,
    pub transform_bind_group: wgpu::BindGroup,
}

pub struct Object {
    pub name: String,
    pub meshes: Vec<Mesh>,
    /// Resting transform from the blueprint.
    pub base: Transform,
    /// Transform drawn this frame.
    pub transform: Transform,
    pub visible: bool,
    pub labels: Vec<Label>,
    pub gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl Object {
    pub fn new(name: &str, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.to_string(),
            meshes,
            base: Transform::default(),
            transform: Transform::default(),
            visible: true,
            labels: Vec::new(),
            gpu_resources: None,
        }
    }

    /// Builder pattern: sets both the resting and the current transform
    pub fn with_base(mut self, base: Transform) -> Self {
        self.base = base;
        self.transform = base;
        self
    }

    pub fn with_label(mut self, text: &'static str, offset: Vector3<f32>) -> Self {
        self.labels.push(Label { text, offset });
        self
    }

    /// Restores the resting transform.
    pub fn reset_transform(&mut self) {
        self.transform = self.base;
    }

    /// World position of every label under the current transform.
    pub fn label_positions(&self) -> impl Iterator<Item = (&'static str, Vector3<f32>)> + '_ {
        self.labels
            .iter()
            .map(|label| (label.text, self.transform.apply(label.offset)))
    }

    /// Whether any mesh should be drawn with `topology`.
    pub fn has_topology(&self, topology: Topology) -> bool {
        self.meshes.iter().any(|mesh| mesh.topology == topology)
    }

    /// Syncs the current transform to the GPU if resources exist
    pub fn update_transform(&mut self, queue: &wgpu::Queue) {
        let uniform = TransformUniform::from(&self.transform);
        if let Some(gpu_resources) = &mut self.gpu_resources {
            gpu_resources.transform_ubo.update_content(queue, uniform);
        }
    }

    /// Get the transform bind group for rendering
    pub fn transform_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources
            .as_ref()
            .map(|res| &res.transform_bind_group)
    }

    pub fn init_gpu_resources(&mut self, device: &Device, transform_layout: &BindGroupLayoutWithDesc) {
        for mesh in &mut self.meshes {
            mesh.init_gpu_resources(device);
        }

        let transform_ubo = UniformBuffer::new_with_data(device, &TransformUniform::from(&self.transform));
        let transform_bind_group = BindGroupBuilder::new(transform_layout)
            .resource(transform_ubo.binding_resource())
            .create(device, &format!("{} Transform", self.name));

        self.gpu_resources = Some(ObjectGpuResources {
            transform_ubo,
            transform_bind_group,
        });
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    /// Draws the meshes of `object` that match `topology`, binding each
    /// mesh's material in slot 2.
    fn draw_object(&mut self, object: &'a Object, topology: Topology, materials: &'a MaterialManager);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer) else {
            return; // Skip drawing if not uploaded
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    fn draw_object(&mut self, object: &'b Object, topology: Topology, materials: &'b MaterialManager) {
        let Some(transform_bind_group) = object.transform_bind_group() else {
            return;
        };
        self.set_bind_group(1, transform_bind_group, &[]);

        for mesh in object.meshes.iter().filter(|mesh| mesh.topology == topology) {
            let material = materials.get_material_for_object(Some(mesh.material_id()));
            match material.get_bind_group() {
                Some(bind_group) => {
                    self.set_bind_group(2, bind_group, &[]);
                    self.draw_mesh(mesh);
                }
                None => log::trace!(
                    "Skipping mesh of '{}': material '{}' has no GPU resources",
                    object.name,
                    material.name
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;
    use cgmath::InnerSpace;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default_transform_is_identity() {
        assert_eq!(Transform::default().matrix(), Matrix4::identity());
    }

    #[test]
    fn test_transform_applies_scale_rotation_then_translation() {
        let transform = Transform {
            translation: Vector3::new(1.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, FRAC_PI_2, 0.0),
            scale: Vector3::new(2.0, 2.0, 2.0),
        };
        // (1,0,0) -> scaled (2,0,0) -> rotated about Y to (0,0,-2) -> moved
        let p = transform.apply(Vector3::new(1.0, 0.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
        assert!((p.z + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_labels_follow_transform() {
        let mut object = Object::new("group", Vec::new())
            .with_base(Transform::at(Vector3::new(0.0, 1.0, 0.0)))
            .with_label("Node", Vector3::new(0.5, 0.0, 0.0));
        object.transform.translation.y += 0.25;

        let (text, position) = object.label_positions().next().expect("one label");
        assert_eq!(text, "Node");
        assert!((position - Vector3::new(0.5, 1.25, 0.0)).magnitude2() < 1e-8);

        object.reset_transform();
        assert_eq!(object.transform, object.base);
    }

    #[test]
    fn test_mesh_keeps_topology_and_material() {
        let mesh = Mesh::from_geometry(&generate_cube(), "slab");
        assert_eq!(mesh.topology(), Topology::Triangles);
        assert_eq!(mesh.material_id(), "slab");
        assert_eq!(mesh.index_count, 36);
        assert_eq!(mesh.vertex_count(), 24);

        let object = Object::new("o", vec![mesh]);
        assert!(object.has_topology(Topology::Triangles));
        assert!(!object.has_topology(Topology::Lines));
    }
}
