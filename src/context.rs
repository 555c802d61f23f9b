// context.rs - Owned renderer context: one-time setup plus the per-frame update
use std::fmt;

use glam::Vec3;

use crate::camera::OrthographicCamera;
use crate::core::{Clock, FrameInfo};
use crate::geometry::GeometryBuffers;
use crate::material::ShaderMaterial;
use crate::math::pulse_opacity;
use crate::scene::{Mesh, MeshId, Scene};
use crate::settings::RenderSettings;
use crate::traits::{CanvasSize, SceneRenderer, SurfaceProvider, TimeSource};

/// Frames between periodic debug lines
const FRAME_LOG_INTERVAL: u64 = 600;

/// Why the renderer could not be set up
#[derive(Debug)]
pub enum InitError {
    /// No drawing surface matches the selector
    SurfaceNotFound { selector: String },
    /// The surface was found but no renderer could be bound to it
    Renderer(anyhow::Error),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::SurfaceNotFound { selector } => {
                write!(f, "could not find drawing surface '{}'", selector)
            }
            InitError::Renderer(e) => write!(f, "failed to bind renderer: {:#}", e),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::SurfaceNotFound { .. } => None,
            InitError::Renderer(e) => Some(<anyhow::Error as AsRef<dyn std::error::Error>>::as_ref(e)),
        }
    }
}

/// Scene, camera, renderer and clock of the pulsing triangle
///
/// Built once by [`RenderContext::initialize`]; each call to [`RenderContext::frame`]
/// updates the opacity uniform and issues exactly one render.
pub struct RenderContext<R: SceneRenderer, C: TimeSource = Clock> {
    scene: Scene,
    camera: OrthographicCamera,
    renderer: R,
    triangle: MeshId,
    clock: C,
    frame_number: u64,
}

impl<R: SceneRenderer, C: TimeSource> RenderContext<R, C> {
    /// Locate the surface, then build scene, camera, renderer and triangle mesh.
    ///
    /// If the surface cannot be found nothing else is constructed.
    pub fn initialize<P>(
        provider: &mut P,
        selector: &str,
        settings: &RenderSettings,
        mut clock: C,
    ) -> Result<Self, InitError>
    where
        P: SurfaceProvider<Renderer = R>,
    {
        let Some(surface) = provider.locate(selector, settings) else {
            let error = InitError::SurfaceNotFound {
                selector: selector.to_string(),
            };
            log::error!("{}", error);
            return Err(error);
        };

        let mut scene = Scene::new();

        let camera = OrthographicCamera::new(settings.bounds)
            .looking_at(Vec3::new(0.0, 0.0, settings.camera_depth), Vec3::ZERO);

        let renderer = provider
            .bind_renderer(surface, settings)
            .map_err(InitError::Renderer)
            .inspect_err(|e| log::error!("{}", e))?;

        let triangle = scene.add(Mesh::new(
            GeometryBuffers::triangle(),
            ShaderMaterial::pulsing(),
        ));

        clock.reset();

        log::info!(
            "triangle renderer initialized on '{}' ({}x{})",
            selector,
            settings.size.width,
            settings.size.height
        );

        Ok(Self {
            scene,
            camera,
            renderer,
            triangle,
            clock,
            frame_number: 0,
        })
    }

    /// Advance the animation to `elapsed` seconds and render one frame
    pub fn frame(&mut self, elapsed: f64) -> Result<FrameInfo, wgpu::SurfaceError> {
        let opacity = pulse_opacity(elapsed);

        if let Some(mesh) = self.scene.mesh_mut(self.triangle) {
            mesh.material.set_opacity(opacity);
        }

        let info = FrameInfo::new(self.frame_number, elapsed, opacity);
        self.frame_number += 1;

        if info.number % FRAME_LOG_INTERVAL == 0 {
            log::debug!("frame {} t={:.3} opacity={:.3}", info.number, info.time, info.opacity);
        }

        self.renderer.render(&self.scene, &self.camera)?;
        Ok(info)
    }

    /// Render a frame at the clock's current time
    pub fn tick(&mut self) -> Result<FrameInfo, wgpu::SurfaceError> {
        let elapsed = self.clock.elapsed_secs();
        self.frame(elapsed)
    }

    /// Resize notification; the canvas keeps its fixed size
    pub fn on_resize(&mut self, size: CanvasSize) {
        log::debug!(
            "ignoring resize to {}x{}: canvas size is fixed",
            size.width,
            size.height
        );
    }

    /// Opacity currently held by the triangle's material
    pub fn opacity(&self) -> f32 {
        self.scene
            .mesh(self.triangle)
            .map(|mesh| mesh.material.opacity())
            .unwrap_or(ShaderMaterial::INITIAL_OPACITY)
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame_number
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &OrthographicCamera {
        &self.camera
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;

    #[derive(Default)]
    struct CountingRenderer {
        renders: usize,
    }

    impl SceneRenderer for CountingRenderer {
        fn render(
            &mut self,
            _scene: &Scene,
            _camera: &OrthographicCamera,
        ) -> Result<(), wgpu::SurfaceError> {
            self.renders += 1;
            Ok(())
        }
    }

    struct FixedProvider {
        available: bool,
    }

    impl SurfaceProvider for FixedProvider {
        type Surface = ();
        type Renderer = CountingRenderer;

        fn locate(&mut self, _selector: &str, _settings: &RenderSettings) -> Option<()> {
            self.available.then_some(())
        }

        fn bind_renderer(
            &mut self,
            _surface: (),
            _settings: &RenderSettings,
        ) -> anyhow::Result<CountingRenderer> {
            Ok(CountingRenderer::default())
        }
    }

    fn context() -> RenderContext<CountingRenderer, ManualClock> {
        let mut provider = FixedProvider { available: true };
        match RenderContext::initialize(
            &mut provider,
            "test",
            &RenderSettings::default(),
            ManualClock::new(),
        ) {
            Ok(ctx) => ctx,
            Err(e) => panic!("initialization failed: {}", e),
        }
    }

    #[test]
    fn test_initial_state() {
        let ctx = context();
        assert_eq!(ctx.scene().len(), 1);
        assert_eq!(ctx.opacity(), 1.0);
        assert_eq!(ctx.frame_count(), 0);
        assert_eq!(ctx.renderer().renders, 0);
        assert_eq!(ctx.camera().position, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_frame_sets_opacity() {
        let mut ctx = context();
        let info = ctx.frame(0.0).unwrap();

        assert_eq!(info.number, 0);
        assert_eq!(info.opacity, 0.5);
        assert_eq!(ctx.opacity(), 0.5);
    }

    #[test]
    fn test_tick_reads_clock() {
        let mut ctx = context();
        ctx.clock_mut().set(std::f64::consts::FRAC_PI_2);

        let info = ctx.tick().unwrap();
        assert!((info.opacity - 1.0).abs() < 1e-6);
        assert_eq!(info.time, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_missing_surface() {
        let mut provider = FixedProvider { available: false };
        let result: Result<RenderContext<CountingRenderer, ManualClock>, _> =
            RenderContext::initialize(
                &mut provider,
                "#missing",
                &RenderSettings::default(),
                ManualClock::new(),
            );

        match result {
            Err(InitError::SurfaceNotFound { selector }) => assert_eq!(selector, "#missing"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("initialization should fail"),
        }
    }

    #[test]
    fn test_resize_is_ignored() {
        let mut ctx = context();
        ctx.on_resize(CanvasSize::new(1024, 768));
        assert_eq!(ctx.frame_count(), 0);
        assert_eq!(ctx.renderer().renders, 0);
    }
}
