use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::cli::Cli;
use crate::flycam::FlyCamera;
use crate::input::WinitController;
use crate::loaders::obj::load_obj_file;
use crate::material::{LightParams, MaterialParams};
use crate::renderer::ModelRenderer;
use crate::window::{ViewerWindow, WindowContext};

const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 30.0, 30.0);
const CAMERA_FOV_Y: f32 = 1.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Application shell: owns the window, renderer, camera, and input state,
/// and drives one update + render per frame
pub struct App {
    cli: Cli,
    window: Option<ViewerWindow>,
    renderer: Option<ModelRenderer>,
    input: WinitController,
    camera: Camera,
    flycam: FlyCamera,
    material: MaterialParams,
    light: LightParams,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let input = WinitController::new((cli.width, cli.height));
        Self {
            cli,
            window: None,
            renderer: None,
            input,
            camera: Camera::new(),
            flycam: FlyCamera::new(CAMERA_START_POSITION),
            material: MaterialParams::default(),
            light: LightParams::default(),
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Viewer demo")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mesh = match load_obj_file(&self.cli.model) {
            Ok(mesh) => mesh,
            Err(e) => {
                log::error!("Failed to load model: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(ModelRenderer::new(
            window.clone(),
            &mesh,
            !self.cli.no_ui,
        )) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let window = ViewerWindow::new(window);
        let size = window.inner().inner_size();
        self.input = WinitController::new((size.width, size.height));

        self.camera
            .set_view_matrix(self.flycam.position(), Vec3::ZERO);
        self.camera
            .set_perspective(CAMERA_FOV_Y, window.aspect_ratio(), CAMERA_NEAR, CAMERA_FAR);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.last_frame_time = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first; consumed events never reach the
        // camera input state
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window.inner(), &event) {
                return;
            }
        }

        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                if let Some(window) = &self.window {
                    self.camera.set_perspective(
                        CAMERA_FOV_Y,
                        window.aspect_ratio(),
                        CAMERA_NEAR,
                        CAMERA_FAR,
                    );
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.update_fps(delta);

                if let Some(window) = &self.window {
                    self.flycam
                        .update(&self.input, window, &mut self.camera, delta);
                }

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    let result = renderer.render(
                        &self.camera,
                        self.flycam.position(),
                        window.inner(),
                        &mut self.material,
                        &mut self.light,
                        self.fps,
                    );
                    match result {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(window.inner().inner_size());
                        }
                        Err(e) => log::error!("Render error: {}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
