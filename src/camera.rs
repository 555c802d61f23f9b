use glam::{Mat4, Vec3};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
}

/// Clipping box of an orthographic projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthographicBounds {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            top: 1.0,
            bottom: -1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Orthographic camera looking at a fixed target
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    pub bounds: OrthographicBounds,
    pub position: Vec3,
    pub target: Vec3,
}

impl OrthographicCamera {
    pub fn new(bounds: OrthographicBounds) -> Self {
        Self {
            bounds,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
        }
    }

    /// Place the camera at `position` and aim it at `target`
    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self
    }

    /// Projection matrix with wgpu's `[0, 1]` depth range
    pub fn projection_matrix(&self) -> Mat4 {
        let b = &self.bounds;
        Mat4::orthographic_rh(b.left, b.right, b.bottom, b.top, b.near, b.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Uniform for drawing an object with the given model transform
    pub fn to_uniform(&self, model: Mat4) -> CameraUniform {
        CameraUniform {
            projection: self.projection_matrix().to_cols_array_2d(),
            model_view: (self.view_matrix() * model).to_cols_array_2d(),
        }
    }
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self::new(OrthographicBounds::default()).looking_at(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO)
    }
}
