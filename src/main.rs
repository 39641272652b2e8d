//! Starfield - warp-speed particle animation
//!
//! Stars stream out of the center of the window with optional motion trails.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use starfield::config::{AppConfig, ConfigError};
use starfield::input::{InputAction, InputMapper};
use starfield::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use starfield_input::ParamController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    controller: ParamController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::new(config.starfield.clone(), config.simulation.seed)
            .with_paused(config.simulation.start_paused);

        // Configure controller from config
        let controls = &config.controls;
        let mut controller = ParamController::new()
            .with_star_count_step(controls.star_count_step)
            .with_speed_step(controls.speed_step)
            .with_star_size_step(controls.star_size_step)
            .with_trail_step(controls.trail_step)
            .with_depth_step(controls.depth_step)
            .with_palette(controls.palette.clone());
        controller.reset(&config.starfield);

        Self {
            config,
            window: None,
            render: None,
            simulation,
            controller,
        }
    }

    fn update_title(&self) {
        if !self.config.debug.show_stats {
            return;
        }
        if let Some(window) = &self.window {
            window.update_title(
                self.simulation.star_count(),
                self.simulation.frames(),
                self.simulation.is_paused(),
            );
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => {
                event_loop.exit();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::TogglePause => {
                if !self.simulation.toggle_pause() {
                    self.request_redraw();
                }
                self.update_title();
            }
            InputAction::Reset => {
                if let Some(render) = &mut self.render {
                    let viewport = render.viewport();
                    self.simulation.reset(viewport, render.canvas_mut());
                }
                self.controller.reset(self.simulation.params());
                self.update_title();
                // Show the cleared canvas even while paused
                self.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialize GPU: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.simulation.initialize(render.viewport());

        self.window = Some(window);
        self.render = Some(render);
        self.update_title();
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };

                if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                    self.handle_action(action, event_loop);
                    return;
                }

                // Parameter keys
                if let Some(change) = self.controller.process_keyboard(
                    key,
                    event.state,
                    self.simulation.params_mut(),
                ) {
                    if let Some(render) = &self.render {
                        self.simulation.apply_change(&change, render.viewport());
                    }
                    self.update_title();
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(render) = &mut self.render else {
                    return;
                };

                let viewport = render.viewport();
                let drew = self.simulation.frame(viewport, render.canvas_mut()).is_some();

                match render.present() {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        render.recover_surface();
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                    }
                }

                if drew {
                    self.update_title();
                    // Request next frame; a paused field stops asking
                    self.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn init_logging(config: &AppConfig) {
    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(config.debug.log_level.as_str());
    env_logger::Builder::from_env(env).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging so the configured level applies
    let loaded: Result<AppConfig, ConfigError> = AppConfig::load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    init_logging(&config);
    if let Err(e) = loaded {
        log::warn!("{}. Using defaults.", e);
    }
    log::info!("Starting Starfield");

    // Create event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
