//! Material system
//!
//! Flat-coloured materials with an emissive term for glowing nodes. Materials
//! are stored centrally in a [`MaterialManager`] and meshes reference them by
//! ID, so every node sharing a colour shares one bind group.

use std::collections::HashMap;
use wgpu::Device;

use crate::wgpu_utils::{
    binding_types, BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc, UniformBuffer,
};

/// Material ID for referencing materials
pub type MaterialId = String;

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    /// 1.0 for lit triangles, 0.0 for lines and points
    pub lit: f32,
}

type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Creates the layout every material bind group is built against.
pub fn material_bind_group_layout(device: &Device) -> BindGroupLayoutWithDesc {
    BindGroupLayoutBuilder::new()
        .next_binding_fragment(binding_types::uniform())
        .create(device, "Material Bind Group Layout")
}

/// Material definition with its shared GPU resources
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub lit: bool,

    // GPU resources - shared by all meshes using this material
    material_ubo: Option<MaterialUBO>,
    bind_group: Option<wgpu::BindGroup>,
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default", [0.8, 0.8, 0.8])
    }
}

impl Material {
    pub fn new(name: &str, color: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            base_color: [color[0], color[1], color[2], 1.0],
            emissive: [0.0; 3],
            lit: true,
            material_ubo: None,
            bind_group: None,
        }
    }

    /// Builder pattern: adds `strength` times the base colour as emission
    pub fn with_glow(mut self, strength: f32) -> Self {
        let strength = strength.max(0.0);
        self.emissive = [
            self.base_color[0] * strength,
            self.base_color[1] * strength,
            self.base_color[2] * strength,
        ];
        self
    }

    /// Builder pattern: skips shading, for lines and points
    pub fn unlit(mut self) -> Self {
        self.lit = false;
        self
    }

    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            base_color: self.base_color,
            emissive: self.emissive,
            lit: if self.lit { 1.0 } else { 0.0 },
        }
    }

    /// Creates the uniform buffer and bind group on first use, then syncs
    /// the current properties.
    pub fn update_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue, layout: &BindGroupLayoutWithDesc) {
        let uniform = self.uniform();

        match &mut self.material_ubo {
            Some(ubo) => {
                ubo.update_content(queue, uniform);
            }
            None => {
                let ubo = MaterialUBO::new_with_data(device, &uniform);
                self.bind_group = Some(
                    BindGroupBuilder::new(layout)
                        .resource(ubo.binding_resource())
                        .create(device, &format!("Material '{}'", self.name)),
                );
                self.material_ubo = Some(ubo);
            }
        }
    }

    /// Gets the bind group for rendering
    pub fn get_bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.bind_group.as_ref()
    }
}

/// Manages all materials of the current scene
pub struct MaterialManager {
    materials: HashMap<MaterialId, Material>,
    default_material: Material,
}

impl Default for MaterialManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialManager {
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
            default_material: Material::default(),
        }
    }

    /// Adds a material, replacing any with the same name
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Adds `material` unless one with the same name exists, and returns
    /// the name to reference it by.
    pub fn ensure_material(&mut self, material: Material) -> MaterialId {
        let id = material.name.clone();
        self.materials.entry(id.clone()).or_insert(material);
        id
    }

    /// Gets a material by ID
    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    pub fn get_default_material(&self) -> &Material {
        &self.default_material
    }

    /// Gets the material for a mesh, falling back to the default material
    /// when none is assigned or the ID is unknown.
    pub fn get_material_for_object(&self, material_id: Option<&MaterialId>) -> &Material {
        material_id
            .and_then(|id| self.get_material(id))
            .unwrap_or(&self.default_material)
    }

    pub fn list_materials(&self) -> Vec<&MaterialId> {
        self.materials.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn clear(&mut self) {
        self.materials.clear();
    }

    /// Updates GPU resources for all materials, including the default
    pub fn update_all_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue, layout: &BindGroupLayoutWithDesc) {
        self.default_material.update_gpu_resources(device, queue, layout);
        for material in self.materials.values_mut() {
            material.update_gpu_resources(device, queue, layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_scales_base_color() {
        let material = Material::new("accent", [0.5, 1.0, 0.0]).with_glow(0.5);
        assert_eq!(material.emissive, [0.25, 0.5, 0.0]);
        assert_eq!(material.uniform().lit, 1.0);
        assert_eq!(Material::new("line", [1.0; 3]).unlit().uniform().lit, 0.0);
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let mut manager = MaterialManager::new();
        let id = manager.ensure_material(Material::new("red", [1.0, 0.0, 0.0]));
        assert_eq!(manager.get_material_for_object(Some(&id)).name, "red");
        assert_eq!(
            manager.get_material_for_object(Some(&"missing".to_string())).name,
            "default"
        );
        assert_eq!(manager.get_material_for_object(None).name, "default");
    }

    #[test]
    fn test_ensure_material_keeps_first_definition() {
        let mut manager = MaterialManager::new();
        manager.ensure_material(Material::new("shared", [1.0, 0.0, 0.0]));
        manager.ensure_material(Material::new("shared", [0.0, 1.0, 0.0]));
        assert_eq!(manager.len(), 1);
        assert_eq!(
            manager.get_material("shared").map(|m| m.base_color),
            Some([1.0, 0.0, 0.0, 1.0])
        );
    }
}
