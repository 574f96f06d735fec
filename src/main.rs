//! Driftfield - animated 2D particle field
//!
//! Renders an endlessly falling particle background (snow dots or circuit
//! traces) in a window, one animator tick per frame.

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use driftfield::config::AppConfig;
use driftfield::systems::WindowSystem;
use driftfield_core::{Animator, ParticleField, Viewport};
use driftfield_render::{FieldCanvas, FieldPipeline, RenderContext};

/// GPU-backed state, created once the window is available
struct RenderState {
    context: RenderContext,
    pipeline: FieldPipeline,
    canvas: FieldCanvas,
    animator: Animator,
}

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    state: Option<RenderState>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            state: None,
        }
    }

    /// Build the field from config at the given surface size
    fn build_animator(&self, viewport: Viewport) -> Animator {
        let params = self.config.field.to_params();
        let style = self.config.rendering.to_style();
        let field = match self.config.field.seed {
            Some(seed) => ParticleField::from_seed(viewport, params, seed),
            None => ParticleField::new(viewport, params),
        };
        Animator::new(field.with_style(style))
    }

    fn update_title(&self) {
        if let (Some(window), Some(state)) = (&self.window, &self.state) {
            window.update_title(
                &self.config.field.mode.to_string(),
                state.animator.field().len(),
                state.animator.is_running(),
            );
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

        let context = match pollster::block_on(RenderContext::new(
            window.window().clone(),
            self.config.window.vsync,
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let pipeline = FieldPipeline::new(&context.device, context.config.format);
        let canvas = FieldCanvas::new(self.config.rendering.background_color)
            .with_circle_segments(self.config.rendering.circle_segments);

        let viewport = Viewport::from((context.config.width, context.config.height));
        let animator = self.build_animator(viewport);
        log::info!(
            "Animating {} {} particles over {}x{}",
            animator.field().len(),
            self.config.field.mode,
            context.config.width,
            context.config.height
        );

        window.request_redraw();
        self.window = Some(window);
        self.state = Some(RenderState {
            context,
            pipeline,
            canvas,
            animator,
        });
        self.update_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Teardown: stop first so no further frame is scheduled
                if let Some(state) = &mut self.state {
                    state.animator.stop();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(state) = &mut self.state {
                    state.context.resize(physical_size);
                    state
                        .animator
                        .resize(Viewport::from((physical_size.width, physical_size.height)));
                }
                // The rebuild can change the population (e.g. a degenerate
                // size going dormant), so refresh the title with it
                self.update_title();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    match key {
                        KeyCode::Escape => {
                            if let Some(state) = &mut self.state {
                                state.animator.stop();
                            }
                            event_loop.exit();
                        }
                        KeyCode::KeyF => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        KeyCode::Space => {
                            if let Some(state) = &mut self.state {
                                if state.animator.is_running() {
                                    state.animator.stop();
                                } else {
                                    state.animator.start();
                                    // Kick the loop back into motion
                                    if let Some(window) = &self.window {
                                        window.request_redraw();
                                    }
                                }
                            }
                            self.update_title();
                        }
                        _ => {}
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(state) = &mut self.state else {
                    return;
                };

                if state.animator.tick(&mut state.canvas) {
                    match state.canvas.present(&state.context, &mut state.pipeline) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = state.context.size;
                            state.context.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory, exiting");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                        }
                    }
                }

                // Schedule the next frame only while running; stopping cancels
                // the loop until Space resumes it
                if state.animator.is_running() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Driftfield");

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
