use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use first_app::camera::CameraPose;
use first_app::cli::Cli;
use first_app::config::AppConfig;
use first_app::core::{Button, Clock, Controller, FrameController, FrameReport, WinitController};
use first_app::renderer::{OverlayStats, Renderer};
use first_app::scene::Scene;
use first_app::traits::{ExitFlag, LogSink, SceneGraph};

// === Application ===

struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    camera: CameraPose,
    input: WinitController,
    controller: FrameController,
    clock: Clock,
    exit: ExitFlag,
    logger: LogSink,
    last_report: Option<FrameReport>,
    /// Capture state last applied to the OS cursor
    applied_capture: Option<bool>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            input: WinitController::new(config.start_captured),
            controller: FrameController::new(config.controller.clone()),
            config,
            window: None,
            renderer: None,
            scene: Scene::default(),
            camera: CameraPose::default(),
            clock: Clock::new(),
            exit: ExitFlag::new(),
            logger: LogSink,
            last_report: None,
            applied_capture: None,
        }
    }

    /// Place the camera and seed the look angles from it
    fn start(&mut self) {
        self.camera = CameraPose::default();
        let (yaw, pitch) = self.camera.yaw_pitch();
        self.controller.reset_look(yaw, pitch);
        self.sync_cursor();
        self.clock.reset();
        info!(
            "Scene {} loaded: {} nodes, camera at {:?}",
            self.scene.name(),
            self.scene.len(),
            self.camera.position
        );
    }

    fn sync_cursor(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let captured = self.input.is_pointer_captured();
        if self.applied_capture == Some(captured) {
            return;
        }

        if captured {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                warn!("Cursor grab unavailable: {}", e);
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            warn!("Failed to release cursor: {}", e);
        }
        window.set_cursor_visible(!captured);
        self.applied_capture = Some(captured);
    }

    fn handle_key(&mut self, button: Button, event_loop: &ActiveEventLoop) {
        self.controller
            .on_key_toggle(button, &mut self.input, &mut self.exit, &mut self.scene);
        self.sync_cursor();
        if self.exit.is_requested() {
            event_loop.exit();
        }
    }

    fn overlay_stats(&self) -> OverlayStats {
        let look = self.controller.look();
        OverlayStats {
            report: self.last_report,
            position: self.camera.position,
            yaw: look.yaw(),
            pitch: look.pitch(),
            pointer_captured: self.input.is_pointer_captured(),
            aux_light: self
                .scene
                .node(&self.controller.config().aux_light)
                .map(|node| node.enabled),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        if let Some(report) =
            self.controller
                .on_tick(delta, &self.input, &mut self.camera, &self.logger)
        {
            self.last_report = Some(report);
        }
        self.input.reset_deltas();

        let stats = self.overlay_stats();
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            match renderer.render(window, &stats) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("Surface out of memory");
                    event_loop.exit();
                }
                Err(e) => warn!("Render error: {}", e),
            }
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
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.scene = Scene::demo();
        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            self.scene.fog_color(),
            self.config.show_overlay,
        )) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.start();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            renderer.handle_event(window, &event);
        }

        if let Some(button) = self.input.process_event(&event) {
            self.handle_key(button, event_loop);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!("Shutting down");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    info!("FirstApp - Controls: WASD move, Shift boost, Tab toggle mouse, L toggle light, Escape quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
