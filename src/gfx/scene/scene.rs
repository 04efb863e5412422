use cgmath::Vector3;
use wgpu::Device;

use crate::{
    gfx::{
        camera::camera_utils::CameraManager,
        geometry::{
            generate_cube, generate_cylinder, generate_icosahedron, generate_sphere, generate_starfield,
            generate_wireframe, GeometryData, Topology,
        },
        resources::material::{material_bind_group_layout, Material, MaterialId, MaterialManager},
    },
    scenes::{NodeBlueprint, SceneBlueprint, SceneChoice, Shape, CONNECTOR_GROUP, FLOW_MARKER_GROUP},
    wgpu_utils::{binding_types, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
};

use super::object::{Mesh, Object, Transform};

/// Seed for starfield point clouds, so the backdrop is the same every run.
const STARFIELD_SEED: u64 = 0x5EED_57A5;

/// Glow applied to the flow marker on top of its base colour.
const MARKER_GLOW: f32 = 0.6;

/// Gap between the top of a node and its label anchor.
const LABEL_GAP: f32 = 0.15;

/// Bind group layouts shared by every object and material in a scene
pub struct SceneLayouts {
    pub transform: BindGroupLayoutWithDesc,
    pub material: BindGroupLayoutWithDesc,
}

impl SceneLayouts {
    pub fn new(device: &Device) -> Self {
        Self {
            transform: BindGroupLayoutBuilder::new()
                .next_binding_vertex(binding_types::uniform())
                .create(device, "Transform Bind Group Layout"),
            material: material_bind_group_layout(device),
        }
    }
}

/// Main scene containing objects, materials, and camera
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
    pub material_manager: MaterialManager,
    pub background: [f32; 3],
    /// Which blueprint the objects were built from, if any.
    pub choice: Option<SceneChoice>,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
            background: [0.0; 3],
            choice: None,
        }
    }

    /// Updates the scene (camera matrices, etc.)
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    /// Removes every object and material. The camera is kept.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.material_manager.clear();
        self.choice = None;
    }

    /// Replaces the scene contents with objects built from `blueprint`.
    ///
    /// Each group becomes one object. Connectors become a static line object
    /// and the flow marker gets its own object, placed at the start of its
    /// first leg. GPU resources must be created afterwards with
    /// [`Scene::init_gpu_resources`].
    pub fn load_blueprint(&mut self, blueprint: &SceneBlueprint) {
        self.clear();
        self.background = blueprint.background;
        self.choice = Some(blueprint.choice);

        for group in &blueprint.groups {
            let mut meshes = Vec::with_capacity(group.nodes.len());
            let mut labels = Vec::new();

            for node in &group.nodes {
                let material = self.node_material(node);
                meshes.push(Mesh::from_geometry(&node_geometry(node), &material));
                if !node.label.is_empty() {
                    labels.push((node.label, label_anchor(node)));
                }
            }

            let mut object = Object::new(group.name, meshes).with_base(Transform::at(group.position.into()));
            for (text, offset) in labels {
                object = object.with_label(text, offset);
            }
            self.objects.push(object);
        }

        if !blueprint.connectors.is_empty() {
            let mut by_color: Vec<([f32; 3], GeometryData)> = Vec::new();
            for connector in &blueprint.connectors {
                let segment = GeometryData {
                    vertices: vec![connector.from, connector.to],
                    normals: vec![[0.0; 3]; 2],
                    indices: vec![0, 1],
                    topology: Topology::Lines,
                };
                match by_color.iter_mut().find(|(color, _)| *color == connector.color) {
                    Some((_, lines)) => lines.append(segment),
                    None => by_color.push((connector.color, segment)),
                }
            }

            let meshes = by_color
                .into_iter()
                .map(|(color, lines)| {
                    let material = self
                        .material_manager
                        .ensure_material(Material::new(&material_key(color, 0.0, false), color).unlit());
                    Mesh::from_geometry(&lines, &material)
                })
                .collect();
            self.objects.push(Object::new(CONNECTOR_GROUP, meshes));
        }

        if let Some(flow) = &blueprint.flow {
            let material = self.material_manager.ensure_material(
                Material::new(&material_key(flow.color, MARKER_GLOW, true), flow.color).with_glow(MARKER_GLOW),
            );
            let sphere = generate_sphere(16, 12).transformed([0.0; 3], [flow.radius; 3]);
            let start = flow.path.position_at(0.0).unwrap_or_else(|| Vector3::new(0.0, 0.0, 0.0));
            self.objects
                .push(Object::new(FLOW_MARKER_GROUP, vec![Mesh::from_geometry(&sphere, &material)]).with_base(Transform::at(start)));
        }

        log::info!(
            "Loaded scene '{}': {} objects, {} materials",
            blueprint.title(),
            self.objects.len(),
            self.material_manager.len()
        );
    }

    fn node_material(&mut self, node: &NodeBlueprint) -> MaterialId {
        let lit = !matches!(node.shape, Shape::Wireframe { .. } | Shape::Starfield { .. });
        let mut material = Material::new(&material_key(node.color, node.glow, lit), node.color).with_glow(node.glow);
        if !lit {
            material = material.unlit();
        }
        self.material_manager.ensure_material(material)
    }

    pub fn find_object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn find_object_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.objects.iter_mut().find(|object| object.name == name)
    }

    /// World positions of every label in the scene.
    pub fn labels(&self) -> impl Iterator<Item = (&'static str, Vector3<f32>)> + '_ {
        self.objects
            .iter()
            .filter(|object| object.visible)
            .flat_map(|object| object.label_positions())
    }

    /// Initializes GPU resources for new objects and all materials
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue, layouts: &SceneLayouts) {
        for object in self.objects.iter_mut().filter(|object| object.gpu_resources.is_none()) {
            object.init_gpu_resources(device, &layouts.transform);
        }

        self.material_manager
            .update_all_gpu_resources(device, queue, &layouts.material);
    }

    /// Syncs all object transforms to the GPU
    pub fn update_all_transforms(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            if object.gpu_resources.is_some() {
                object.update_transform(queue);
            }
        }
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let meshes = self.objects.iter().flat_map(|obj| obj.meshes.iter());
        let (mut total_triangles, mut total_lines, mut total_vertices) = (0, 0, 0);
        for mesh in meshes {
            total_vertices += mesh.vertex_count();
            match mesh.topology() {
                Topology::Triangles => total_triangles += mesh.index_count / 3,
                Topology::Lines => total_lines += mesh.index_count / 2,
                Topology::Points => {}
            }
        }

        SceneStatistics {
            object_count: self.objects.len(),
            material_count: self.material_manager.len(),
            total_triangles,
            total_lines,
            total_vertices,
        }
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub material_count: usize,
    pub total_triangles: u32,
    pub total_lines: u32,
    pub total_vertices: u32,
}

/// Geometry of one node, sized and offset within its group.
pub fn node_geometry(node: &NodeBlueprint) -> GeometryData {
    let base = match node.shape {
        Shape::Cube => generate_cube(),
        Shape::Sphere => generate_sphere(24, 16),
        Shape::Cylinder => generate_cylinder(20),
        Shape::Icosahedron => generate_icosahedron(0),
        Shape::Wireframe { detail } => generate_wireframe(detail),
        Shape::Starfield { count, radius, depth } => generate_starfield(count, radius, depth, STARFIELD_SEED),
    };
    base.transformed(node.offset, node.size)
}

/// Label anchor just above the node, in group space.
fn label_anchor(node: &NodeBlueprint) -> Vector3<f32> {
    let half_height = match node.shape {
        Shape::Cube | Shape::Cylinder => node.size[1] * 0.5,
        _ => node.size[1],
    };
    Vector3::new(node.offset[0], node.offset[1] + half_height + LABEL_GAP, node.offset[2])
}

/// Materials are shared by colour, glow and shading mode.
fn material_key(color: [f32; 3], glow: f32, lit: bool) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "{:02x}{:02x}{:02x}-g{:.2}{}",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        glow,
        if lit { "" } else { "-unlit" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{select_scene, Category};

    fn loaded(id: &str) -> Scene {
        let mut scene = Scene::new(CameraManager::default());
        scene.load_blueprint(&select_scene(id));
        scene
    }

    #[test]
    fn test_blueprint_groups_become_objects() {
        let blueprint = select_scene("database");
        let scene = loaded("database");
        for group in &blueprint.groups {
            let object = scene.find_object(group.name).expect("group object");
            assert_eq!(object.meshes.len(), group.nodes.len());
            assert_eq!(object.base.translation, Vector3::from(group.position));
        }
        assert!(scene.find_object(CONNECTOR_GROUP).is_some());
        assert_eq!(scene.choice, Some(SceneChoice::Category(Category::Database)));
    }

    #[test]
    fn test_marker_starts_at_first_waypoint() {
        let blueprint = select_scene("fullstack");
        let scene = loaded("fullstack");
        let marker = scene.find_object(FLOW_MARKER_GROUP).expect("marker object");
        let first = blueprint
            .flow
            .as_ref()
            .and_then(|flow| flow.path.waypoints().next())
            .expect("first waypoint");
        assert_eq!(marker.transform.translation, first);
    }

    #[test]
    fn test_default_scene_has_no_marker_and_draws_points_and_lines() {
        let scene = loaded("not-a-category");
        assert!(scene.find_object(FLOW_MARKER_GROUP).is_none());
        let stars = scene.find_object("starfield").expect("starfield");
        assert!(stars.has_topology(Topology::Points));
        let wire = scene.find_object("wireframe").expect("wireframe");
        assert!(wire.has_topology(Topology::Lines));
        assert_eq!(scene.choice, Some(SceneChoice::Default));
    }

    #[test]
    fn test_reloading_replaces_contents() {
        let mut scene = loaded("web3");
        scene.load_blueprint(&select_scene("iot"));
        assert!(scene.find_object("chain").is_none());
        assert!(scene.find_object("sensors").is_some());
        let stats = scene.get_statistics();
        assert_eq!(stats.object_count, scene.objects.len());
        assert!(stats.total_triangles > 0);
        assert!(stats.total_lines > 0);
    }

    #[test]
    fn test_labels_include_stage_titles() {
        let scene = loaded("cybersecurity");
        let texts: Vec<&str> = scene.labels().map(|(text, _)| text).collect();
        assert!(texts.contains(&"Threat Detection"));
        assert!(texts.contains(&"Incident Response"));
    }

    #[test]
    fn test_material_key_shares_equal_colors() {
        assert_eq!(material_key([1.0, 0.0, 0.0], 0.0, true), "ff0000-g0.00");
        assert_ne!(
            material_key([1.0, 0.0, 0.0], 0.0, true),
            material_key([1.0, 0.0, 0.0], 0.0, false)
        );
    }
}
