use crate::camera::OrthographicCamera;
use crate::scene::Scene;

/// Scene renderer bound to a drawing surface
pub trait SceneRenderer {
    /// Clear the surface and draw every mesh of `scene` through `camera`
    fn render(
        &mut self,
        scene: &Scene,
        camera: &OrthographicCamera,
    ) -> Result<(), wgpu::SurfaceError>;
}
