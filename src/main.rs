//! circle_pong - a window with one circle moved by WASD
//!
//! Escape quits. The window's close button is not observed.

use std::error::Error;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use circle_pong::config::AppConfig;
use circle_pong::systems::{RenderSystem, SimulationSystem, StepResult, WindowSystem};
use pong_input::KeyQueue;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    keys: KeyQueue,
    simulation: SimulationSystem,
    /// Fatal error raised inside the event loop, reported once it returns
    init_error: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::from_config(&config);
        Self {
            config,
            window: None,
            render: None,
            keys: KeyQueue::new(),
            simulation,
            init_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let render = RenderSystem::new(
            window.window().clone(),
            (self.config.window.width, self.config.window.height),
            self.config.window.vsync,
        )?;

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Initialization failed: {}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.keys.push_window_event(&event) {
            return;
        }

        match event {
            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(render) = &mut self.render else {
                    return;
                };

                match self.simulation.step(&mut self.keys, render) {
                    StepResult::Continue => {}
                    StepResult::RecoverSurface => render.recover_surface(),
                    StepResult::Exit => {
                        event_loop.exit();
                        return;
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            // CloseRequested and everything else is ignored
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting circle_pong");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.init_error.take() {
        return Err(e);
    }

    // Dropping the app releases the surface and window
    drop(app);
    log::info!("Shut down cleanly");
    Ok(())
}
