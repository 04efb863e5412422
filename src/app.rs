//! The viewer application
//!
//! One winit event loop drives everything: input, per-frame animation,
//! rendering and the UI. Only PDF encoding leaves this thread.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowAttributes},
};

use crate::{
    animation::AnimationManager,
    config::AppConfig,
    export::{ExportQueue, PdfExporter},
    gfx::{camera::CameraManager, scene::Scene, RenderEngine},
    ui::{action_for_key, project_labels, viewer_ui, PanelStatus, UiAction, UiManager},
};

pub struct TechAnimationApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    animation: AnimationManager,
    exporter: PdfExporter,
    exports: ExportQueue,
    started: Instant,
    startup_error: Option<anyhow::Error>,
}

impl TechAnimationApp {
    /// Create the event loop and load the configured scene
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;

        let mut scene = Scene::new(CameraManager::default());
        let mut animation = AnimationManager::new(&config.category, config.start_paused);
        animation.load_current(&mut scene);

        Ok(Self {
            event_loop,
            app_state: AppState {
                exporter: PdfExporter::new(config.output_dir.clone()),
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                animation,
                exports: ExportQueue::new(),
                started: Instant::now(),
                startup_error: None,
            },
        })
    }

    /// Run the application until the window closes
    pub fn run(mut self) -> anyhow::Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated abnormally")?;

        self.app_state.exports.wait_all();
        match self.app_state.startup_error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attributes = WindowAttributes::default()
            .with_title(format!("Tech Animation - {}", self.animation.choice().title()))
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attributes).context("failed to create window")?);

        let PhysicalSize { width, height } = window.inner_size();
        let mut renderer = pollster::block_on(RenderEngine::new(window.clone(), width, height))
            .context("failed to initialise graphics")?;
        renderer.set_vsync(self.config.vsync);

        self.scene.camera_manager.camera.resize_projection(width, height);
        renderer.prepare_scene(&mut self.scene);

        self.ui_manager = Some(UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window,
        ));
        self.render_engine = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn apply(&mut self, action: UiAction, event_loop: &ActiveEventLoop) {
        match action {
            UiAction::Select(category) => {
                self.animation.select(category.id(), &mut self.scene);
                if let Some(render_engine) = &self.render_engine {
                    render_engine.prepare_scene(&mut self.scene);
                }
                if let Some(window) = &self.window {
                    window.set_title(&format!("Tech Animation - {}", category.title()));
                }
            }
            UiAction::TogglePause => {
                self.animation.toggle_pause();
            }
            UiAction::Reset => self.animation.reset(),
            UiAction::Export => self.export(),
            UiAction::Camera(action) => self.scene.camera_manager.apply(action),
            UiAction::Quit => event_loop.exit(),
        }
    }

    fn export(&mut self) {
        let frame = self
            .render_engine
            .as_ref()
            .and_then(|render_engine| render_engine.capture_frame(&self.scene));
        let file_name = self.animation.export_file_name();
        if let Some(job) = self.exporter.spawn(&file_name, frame) {
            self.exports.push(job);
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        let shift = self.scene.camera_manager.controller.is_shift_held();
        if let Some(action) = action_for_key(key, shift) {
            self.apply(action, event_loop);
        }
    }

    /// Animates, renders and returns the actions the UI raised.
    fn redraw(&mut self) -> Vec<UiAction> {
        let mut actions = Vec::new();
        let (Some(render_engine), Some(window)) = (self.render_engine.as_mut(), self.window.as_ref()) else {
            return actions;
        };

        let elapsed = self.started.elapsed().as_secs_f32();
        self.animation.update(elapsed, &mut self.scene);
        self.scene.update();
        render_engine.update(self.scene.camera_manager.camera.uniform);
        self.scene.update_all_transforms(render_engine.queue());
        self.exports.reap();

        let (width, height) = render_engine.get_surface_size();
        let labels = project_labels(&self.scene, width as f32, height as f32);
        let status = PanelStatus::from_manager(&self.animation);

        match self.ui_manager.as_mut() {
            Some(ui_manager) => render_engine.render_frame(
                &self.scene,
                Some(
                    |device: &wgpu::Device,
                     queue: &wgpu::Queue,
                     encoder: &mut wgpu::CommandEncoder,
                     view: &wgpu::TextureView| {
                        ui_manager.draw(device, queue, encoder, window, view, |ui| {
                            viewer_ui(ui, &status, &labels, &mut actions);
                        });
                    },
                ),
            ),
            None => render_engine.render_frame(
                &self.scene,
                None::<fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView)>,
            ),
        }

        actions
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(error) = self.init_graphics(event_loop) {
            log::error!("{:#}", error);
            self.startup_error = Some(error);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // modifier state must follow every press and release, even ones the UI keeps
        if let WindowEvent::KeyboardInput { event: key_event, .. } = &event {
            self.scene.camera_manager.process_keyboard_event(key_event);
        }

        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(&window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event, event_loop),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene.camera_manager.camera.resize_projection(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                for action in self.redraw() {
                    self.apply(action, event_loop);
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // drags that start over a panel must not orbit the camera
        self.scene.camera_manager.controller.blocked = self
            .ui_manager
            .as_ref()
            .is_some_and(|ui_manager| ui_manager.wants_mouse());
        self.scene.camera_manager.process_event(&event, window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.exports.pending() > 0 {
            log::info!("Waiting for {} export(s) to finish", self.exports.pending());
        }
        self.exports.wait_all();
    }
}
