//! WGPU-based rendering engine
//!
//! Owns the surface, device and pipelines. Draws a [`Scene`] to the window
//! with an optional UI overlay, and can render the same view offscreen to
//! read the pixels back for export.

use std::sync::Arc;
use wgpu::{Device, TextureFormat};

use crate::{
    error::RenderError,
    gfx::{
        camera::camera_utils::CameraUniform,
        geometry::Topology,
        resources::{
            global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, LightConfig},
            texture_resource::TextureResource,
        },
        scene::{object::DrawObject, scene::Scene, SceneLayouts},
    },
};

use super::{
    capture::{is_bgra, padded_bytes_per_row, unpad_rows, CapturedFrame},
    pipeline_manager::{PipelineConfig, PipelineManager},
};

/// Pipelines in draw order. Solid geometry first so lines and points are
/// depth-tested against it.
const SCENE_PIPELINES: [(Topology, &str); 3] = [
    (Topology::Triangles, "Scene Triangles"),
    (Topology::Lines, "Scene Lines"),
    (Topology::Points, "Scene Points"),
];

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    layouts: SceneLayouts,
    light_config: LightConfig,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    ///
    /// # Errors
    /// Fails when no surface, adapter or device can be created.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Immediate,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "Surface configured: {}x{} {:?} on {}",
            config.width,
            config.height,
            format,
            adapter.get_info().name
        );

        let depth_texture = TextureResource::create_depth_texture(&device, config.width, config.height, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let layouts = SceneLayouts::new(&device);

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("scene", include_str!("scene.wgsl"));

        let bind_group_layouts = vec![
            global_bindings.bind_group_layout().clone(),
            layouts.transform.layout.clone(),
            layouts.material.layout.clone(),
        ];
        let color_targets = vec![Some(wgpu::ColorTargetState {
            format,
            blend: Some(wgpu::BlendState::REPLACE),
            write_mask: wgpu::ColorWrites::ALL,
        })];

        for (topology, name) in SCENE_PIPELINES {
            let fragment_entry = match topology {
                Topology::Triangles => "fs_main",
                Topology::Lines | Topology::Points => "fs_unlit",
            };
            pipeline_manager.register_pipeline(
                name,
                PipelineConfig::default_with_shader("scene")
                    .with_label(name)
                    .with_fragment_entry(fragment_entry)
                    .with_primitive_topology(topology.primitive_topology())
                    // icosahedra and cylinder caps are viewed from every side
                    .with_cull_mode(None)
                    .with_depth_format(TextureResource::DEPTH_FORMAT)
                    .with_bind_group_layouts(bind_group_layouts.clone())
                    .with_color_targets(color_targets.clone()),
            );
        }

        if let Err(errors) = pipeline_manager.create_all_pipelines() {
            for error in errors {
                log::error!("{}", error);
            }
        }

        Ok(RenderEngine {
            device: device_handle,
            config,
            format,
            surface,
            queue: queue_handle,
            depth_texture,
            pipeline_manager,
            global_bindings,
            global_ubo,
            layouts,
            light_config: LightConfig::default(),
        })
    }

    /// Creates GPU resources for any objects and materials that lack them.
    pub fn prepare_scene(&self, scene: &mut Scene) {
        scene.init_gpu_resources(&self.device, &self.queue, &self.layouts);
    }

    /// Renders one frame to the window, then lets `ui_callback` draw on top.
    ///
    /// A lost or outdated surface is reconfigured and the frame is skipped.
    pub fn render_frame<F>(&mut self, scene: &Scene, ui_callback: Option<F>)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                log::warn!("Skipping frame: {}", e);
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = begin_scene_pass(
                &mut encoder,
                &surface_texture_view,
                &self.depth_texture.view,
                scene.background,
                "Main Render Pass",
            );
            draw_scene(
                &mut render_pass,
                &self.pipeline_manager,
                self.global_bindings.bind_group(),
                scene,
            );
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(&self.device, &self.queue, &mut encoder, &surface_texture_view);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }

    /// Renders the scene offscreen at the surface size and reads it back.
    ///
    /// The UI overlay is not included. Returns `None` when the surface has
    /// no area or the readback fails.
    pub fn capture_frame(&self, scene: &Scene) -> Option<CapturedFrame> {
        let (width, height) = self.get_surface_size();
        if width == 0 || height == 0 {
            return None;
        }

        let target = TextureResource::create_capture_target(&self.device, width, height, self.format, "Capture Target");
        let depth = TextureResource::create_depth_texture(&self.device, width, height, "Capture Depth");

        let padded_row = padded_bytes_per_row(width);
        let staging_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Capture Staging Buffer"),
            size: padded_row as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Capture Encoder"),
        });

        {
            let mut render_pass = begin_scene_pass(&mut encoder, &target.view, &depth.view, scene.background, "Capture Pass");
            draw_scene(
                &mut render_pass,
                &self.pipeline_manager,
                self.global_bindings.bind_group(),
                scene,
            );
        }

        encoder.copy_texture_to_buffer(
            target.texture.as_image_copy(),
            wgpu::TexelCopyBufferInfo {
                buffer: &staging_buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = staging_buffer.slice(..);
        let (tx, rx) = futures::channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        if let Err(e) = self.device.poll(wgpu::PollType::Wait) {
            log::warn!("Frame capture poll failed: {}", e);
            return None;
        }

        match futures::executor::block_on(rx) {
            Ok(Ok(())) => {
                let mapped = slice.get_mapped_range();
                let pixels = unpad_rows(&mapped, width, height, padded_row, is_bgra(self.format));
                drop(mapped);
                staging_buffer.unmap();
                Some(CapturedFrame { width, height, pixels })
            }
            _ => {
                log::warn!("Frame capture readback failed");
                None
            }
        }
    }

    pub fn update(&mut self, camera_uniform: CameraUniform) {
        update_global_ubo(&mut self.global_ubo, &self.queue, camera_uniform, self.light_config);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;

        self.surface.configure(&self.device, &self.config);

        self.depth_texture = TextureResource::create_depth_texture(&self.device, width, height, "depth_texture");
    }

    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn set_vsync(&mut self, enable: bool) {
        self.config.present_mode = if enable {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::Immediate
        };

        self.surface.configure(&self.device, &self.config);
    }
}

fn begin_scene_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    color: &wgpu::TextureView,
    depth: &wgpu::TextureView,
    background: [f32; 3],
    label: &str,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: color,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color {
                    r: background[0] as f64,
                    g: background[1] as f64,
                    b: background[2] as f64,
                    a: 1.0,
                }),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: depth,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        occlusion_query_set: None,
        timestamp_writes: None,
    })
}

fn draw_scene<'a>(
    render_pass: &mut wgpu::RenderPass<'a>,
    pipelines: &'a PipelineManager,
    globals: &'a wgpu::BindGroup,
    scene: &'a Scene,
) {
    render_pass.set_bind_group(0, globals, &[]);

    for (topology, name) in SCENE_PIPELINES {
        let Some(pipeline) = pipelines.pipeline(name) else {
            continue;
        };
        render_pass.set_pipeline(pipeline);

        for object in scene
            .objects
            .iter()
            .filter(|object| object.visible && object.has_topology(topology))
        {
            render_pass.draw_object(object, topology, &scene.material_manager);
        }
    }
}
