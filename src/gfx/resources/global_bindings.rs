//! Global uniform bindings for camera and scene lighting
//!
//! One uniform buffer shared by every pipeline in slot 0: the camera's
//! view-projection and eye position, one point light and the ambient term.

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc, UniformBuffer},
};

/// Global uniform buffer content.
/// MUST match the `Globals` struct in `scene.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],  // Camera position (homogeneous coordinates)
    view_proj: [[f32; 4]; 4], // Camera view-projection matrix

    light_position: [f32; 3],
    light_intensity: f32,
    light_color: [f32; 3],
    ambient: f32,
}
// 16 + 64 + 12 + 4 + 12 + 4 = 112 bytes

/// Scene lighting: one point light plus a flat ambient term
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
    pub ambient: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: [10.0, 10.0, 10.0],
            color: [1.0, 1.0, 1.0],
            intensity: 0.5,
            ambient: 0.8,
        }
    }
}

impl GlobalUBOContent {
    pub fn new(camera: CameraUniform, light: LightConfig) -> Self {
        Self {
            view_position: camera.view_position,
            view_proj: camera.view_proj,
            light_position: light.position,
            light_intensity: light.intensity,
            light_color: light.color,
            ambient: light.ambient,
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Updates the global uniform buffer with camera and light data
///
/// Called once per frame; unchanged content is not re-uploaded.
pub fn update_global_ubo(ubo: &mut GlobalUBO, queue: &wgpu::Queue, camera: CameraUniform, light: LightConfig) {
    ubo.update_content(queue, GlobalUBOContent::new(camera, light));
}

/// Bind group layout and bind group for the global uniforms (slot 0)
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group Layout");

        let bind_group = BindGroupBuilder::new(&bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, "Global Bind Group");

        GlobalBindings {
            bind_group_layout,
            bind_group,
        }
    }

    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
