//! ImGui UI manager
//!
//! Handles ImGui integration with wgpu and winit, providing frame management,
//! input handling, and rendering of the viewer panels.

use imgui::{Context, FontConfig, FontSource, MouseCursor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use std::time::Instant;
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{Event, WindowEvent},
    window::Window,
};

/// ImGui UI manager
///
/// Owns the ImGui context, the winit platform glue and the wgpu renderer.
pub struct UiManager {
    pub context: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    last_frame: Instant,
    last_cursor: Option<MouseCursor>,
}

impl UiManager {
    /// Creates a new UI manager
    ///
    /// Uses locked DPI mode so panel coordinates are window pixels, the same
    /// space projected labels are computed in.
    ///
    /// # Arguments
    /// * `device` - WGPU device for creating renderer resources
    /// * `queue` - WGPU queue for renderer operations
    /// * `output_color_format` - Target texture format for rendering
    /// * `window` - Window for platform integration
    pub fn new(device: &Device, queue: &Queue, output_color_format: TextureFormat, window: &Window) -> Self {
        let mut context = Context::create();
        context.set_ini_filename(None);

        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(context.io_mut(), window, HiDpiMode::Locked(1.0));

        let font_size = 24.0;
        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: font_size,
                ..Default::default()
            }),
        }]);

        let renderer_config = RendererConfig {
            texture_format: output_color_format,
            ..Default::default()
        };
        let renderer = Renderer::new(&mut context, device, queue, renderer_config);

        Self {
            context,
            platform,
            renderer,
            last_frame: Instant::now(),
            last_cursor: None,
        }
    }

    /// Updates ImGui's display size to match render target
    pub fn update_display_size(&mut self, width: u32, height: u32) {
        self.context.io_mut().display_size = [width as f32, height as f32];
    }

    /// Whether ImGui wants the mouse this frame (pointer over a panel)
    pub fn wants_mouse(&self) -> bool {
        self.context.io().want_capture_mouse
    }

    /// Handles input events and returns whether UI captured them
    ///
    /// Pointer events count as captured while imgui wants the mouse,
    /// keyboard events only while a text field has keyboard focus.
    ///
    /// # Arguments
    /// * `window` - Window reference for platform integration
    /// * `event` - Input event to process
    pub fn handle_input<T>(&mut self, window: &Window, event: &Event<T>) -> bool {
        let Event::WindowEvent {
            event: window_event, ..
        } = event
        else {
            return false;
        };
        let Some(kind) = InputKind::of(window_event) else {
            return false;
        };

        self.platform.handle_event(self.context.io_mut(), window, event);

        let io = self.context.io();
        kind.captured(io.want_capture_mouse, io.want_capture_keyboard)
    }

    /// Builds the UI for this frame and returns whether it wants input
    ///
    /// # Arguments
    /// * `window` - Window reference for platform operations
    /// * `run_ui` - Callback function that builds the UI
    pub fn update_logic<F>(&mut self, window: &Window, run_ui: F) -> bool
    where
        F: FnOnce(&imgui::Ui),
    {
        let now = Instant::now();
        self.context.io_mut().update_delta_time(now - self.last_frame);
        self.last_frame = now;

        if let Err(e) = self.platform.prepare_frame(self.context.io_mut(), window) {
            log::warn!("Failed to prepare UI frame: {}", e);
        }

        let ui = self.context.frame();
        run_ui(&ui);

        if self.last_cursor != ui.mouse_cursor() {
            self.last_cursor = ui.mouse_cursor();
            self.platform.prepare_render(&ui, window);
        }

        let io = self.context.io();
        io.want_capture_mouse || io.want_capture_keyboard
    }

    /// Renders the UI built in the last `update_logic()` call on top of
    /// `color_attachment`, keeping the scene underneath.
    pub fn render_display_only(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        color_attachment: &TextureView,
    ) {
        let draw_data = self.context.render();

        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return;
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("imgui_render_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_attachment,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(e) = self.renderer.render(draw_data, queue, device, &mut render_pass) {
            log::warn!("Failed to render UI: {}", e);
        }
    }

    /// Builds and renders the UI in one go
    pub fn draw<F>(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        window: &Window,
        color_attachment: &TextureView,
        run_ui: F,
    ) -> bool
    where
        F: FnOnce(&imgui::Ui),
    {
        let wants_input = self.update_logic(window, run_ui);
        self.render_display_only(device, queue, encoder, color_attachment);
        wants_input
    }
}

/// Which imgui capture flag decides whether an event stays with the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Pointer,
    Keyboard,
}

impl InputKind {
    fn of(event: &WindowEvent) -> Option<InputKind> {
        match event {
            WindowEvent::CursorMoved { .. } | WindowEvent::MouseInput { .. } | WindowEvent::MouseWheel { .. } => {
                Some(InputKind::Pointer)
            }
            WindowEvent::KeyboardInput { .. } | WindowEvent::ModifiersChanged(_) | WindowEvent::Focused(_) => {
                Some(InputKind::Keyboard)
            }
            _ => None,
        }
    }

    fn captured(self, want_mouse: bool, want_keyboard: bool) -> bool {
        match self {
            InputKind::Pointer => want_mouse,
            InputKind::Keyboard => want_keyboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_hovering_a_panel_leaves_keys_to_the_viewer() {
        assert!(InputKind::Pointer.captured(true, false));
        assert!(!InputKind::Keyboard.captured(true, false));
        assert!(InputKind::Keyboard.captured(false, true));
        assert!(!InputKind::Pointer.captured(false, true));
    }

    #[test]
    fn test_event_classification() {
        assert_eq!(InputKind::of(&WindowEvent::Focused(true)), Some(InputKind::Keyboard));
        assert_eq!(InputKind::of(&WindowEvent::Resized(PhysicalSize::new(800, 600))), None);
        assert_eq!(InputKind::of(&WindowEvent::CloseRequested), None);
    }
}
