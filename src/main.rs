use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use pulse_triangle::cli::Cli;
use pulse_triangle::core::{Clock, SurfaceRenderer, WinitSurfaceProvider};
use pulse_triangle::settings::RenderSettings;
use pulse_triangle::traits::CanvasSize;
use pulse_triangle::RenderContext;

/// Used when neither `--log` nor `RUST_LOG` is given
const DEFAULT_LOG_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// `RUST_LOG` (or the default filter), with `--log` directives applied on top
fn log_builder(filter: Option<&str>) -> env_logger::Builder {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder
}

struct App {
    cli: Cli,
    settings: RenderSettings,
    window: Option<Arc<Window>>,
    context: Option<RenderContext<SurfaceRenderer, Clock>>,
    initialized: bool,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            settings: RenderSettings::default(),
            window: None,
            context: None,
            initialized: false,
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(context) = &mut self.context else {
            return;
        };

        match context.tick() {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                context.renderer_mut().reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("skipping frame: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let mut provider = WinitSurfaceProvider::new(event_loop);
        let context = RenderContext::initialize(
            &mut provider,
            &self.cli.title,
            &self.settings,
            Clock::new(),
        );

        match context {
            Ok(context) => {
                self.window = provider.window().cloned();
                self.context = Some(context);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(_) => {
                // Already logged; leave without starting the frame loop
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
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
                if let Some(context) = &mut self.context {
                    context.on_resize(CanvasSize::new(size.width, size.height));
                }
            }
            WindowEvent::RedrawRequested => self.draw_frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    log_builder(cli.log.as_deref()).init();

    let event_loop = EventLoop::new()?;
    let quiet = cli.quiet;
    let mut app = App::new(cli);

    if !quiet {
        log::info!("Pulse Triangle - Escape to quit");
        log::info!("- Colorful triangle with vertex colors");
        log::info!("- Pulsing opacity effect");
        log::info!("- Transparency blending");
    }

    event_loop.run_app(&mut app)?;

    Ok(())
}
