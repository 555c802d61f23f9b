use super::renderer::SceneRenderer;
use crate::settings::RenderSettings;

/// Drawing surface size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Locates drawing surfaces and binds renderers to them
pub trait SurfaceProvider {
    /// Handle to a located surface
    type Surface;
    /// Renderer produced for a surface
    type Renderer: SceneRenderer;

    /// Find the surface identified by `selector`, if any
    fn locate(&mut self, selector: &str, settings: &RenderSettings) -> Option<Self::Surface>;

    /// Create a renderer drawing into `surface`
    fn bind_renderer(
        &mut self,
        surface: Self::Surface,
        settings: &RenderSettings,
    ) -> anyhow::Result<Self::Renderer>;
}
