use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use super::surface_renderer::SurfaceRenderer;
use crate::settings::RenderSettings;
use crate::traits::SurfaceProvider;

/// Surface provider backed by winit: the selector becomes the title of a new
/// fixed-size window
pub struct WinitSurfaceProvider<'a> {
    event_loop: &'a ActiveEventLoop,
    window: Option<Arc<Window>>,
}

impl<'a> WinitSurfaceProvider<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop) -> Self {
        Self {
            event_loop,
            window: None,
        }
    }

    /// Window created by the last successful `locate`
    pub fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

impl SurfaceProvider for WinitSurfaceProvider<'_> {
    type Surface = Arc<Window>;
    type Renderer = SurfaceRenderer;

    fn locate(&mut self, selector: &str, settings: &RenderSettings) -> Option<Arc<Window>> {
        let attributes = Window::default_attributes()
            .with_title(selector)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                settings.size.width,
                settings.size.height,
            ))
            .with_resizable(false);

        match self.event_loop.create_window(attributes) {
            Ok(window) => {
                let window = Arc::new(window);
                self.window = Some(window.clone());
                Some(window)
            }
            Err(e) => {
                log::debug!("window creation for '{}' failed: {}", selector, e);
                None
            }
        }
    }

    fn bind_renderer(
        &mut self,
        surface: Arc<Window>,
        settings: &RenderSettings,
    ) -> anyhow::Result<SurfaceRenderer> {
        SurfaceRenderer::new(surface, settings)
    }
}
