// material.rs - Shader material with a single opacity uniform

/// Opacity uniform buffer data for GPU (padded to 16 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OpacityUniform {
    pub opacity: f32,
    pub _pad: [f32; 3],
}

impl OpacityUniform {
    pub const fn new(opacity: f32) -> Self {
        Self {
            opacity,
            _pad: [0.0; 3],
        }
    }
}

/// How a transparent material composites onto the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blending {
    /// `src * alpha + dst * (1 - alpha)`
    #[default]
    Normal,
}

impl Blending {
    /// Blend state for the color target
    pub fn blend_state(self) -> wgpu::BlendState {
        match self {
            Blending::Normal => wgpu::BlendState::ALPHA_BLENDING,
        }
    }
}

/// Custom shader material: WGSL source plus the `opacity` uniform it reads
#[derive(Debug, Clone)]
pub struct ShaderMaterial {
    shader_source: &'static str,
    uniform: OpacityUniform,
    transparent: bool,
    blending: Blending,
}

impl ShaderMaterial {
    /// Opacity the uniform holds before the first frame
    pub const INITIAL_OPACITY: f32 = 1.0;

    pub fn new(shader_source: &'static str) -> Self {
        Self {
            shader_source,
            uniform: OpacityUniform::new(Self::INITIAL_OPACITY),
            transparent: false,
            blending: Blending::Normal,
        }
    }

    /// Material for the pulsing triangle: transparent, normal blending
    pub fn pulsing() -> Self {
        Self::new(TRIANGLE_SHADER)
            .with_transparent(true)
            .with_blending(Blending::Normal)
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_blending(mut self, blending: Blending) -> Self {
        self.blending = blending;
        self
    }

    pub fn shader_source(&self) -> &'static str {
        self.shader_source
    }

    pub fn opacity(&self) -> f32 {
        self.uniform.opacity
    }

    /// Store a new opacity, clamped to `[0, 1]`
    pub fn set_opacity(&mut self, opacity: f32) {
        self.uniform.opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    pub fn uniform(&self) -> &OpacityUniform {
        &self.uniform
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn blending(&self) -> Blending {
        self.blending
    }

    /// Blend state for the pipeline; opaque materials overwrite the target
    pub fn blend_state(&self) -> wgpu::BlendState {
        if self.transparent {
            self.blending.blend_state()
        } else {
            wgpu::BlendState::REPLACE
        }
    }
}

/// Vertex and fragment stages for the pulsing triangle
pub const TRIANGLE_SHADER: &str = include_str!("triangle.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<OpacityUniform>(), 16);
    }

    #[test]
    fn test_pulsing_defaults() {
        let material = ShaderMaterial::pulsing();
        assert_eq!(material.opacity(), 1.0);
        assert!(material.is_transparent());
        assert_eq!(material.blending(), Blending::Normal);
        assert_eq!(material.blend_state(), wgpu::BlendState::ALPHA_BLENDING);
    }

    #[test]
    fn test_set_opacity_clamps() {
        let mut material = ShaderMaterial::pulsing();

        material.set_opacity(0.25);
        assert_eq!(material.opacity(), 0.25);

        material.set_opacity(1.5);
        assert_eq!(material.opacity(), 1.0);

        material.set_opacity(-0.5);
        assert_eq!(material.opacity(), 0.0);

        material.set_opacity(f32::NAN);
        assert_eq!(material.opacity(), 0.0);
    }

    #[test]
    fn test_opaque_material_replaces() {
        let material = ShaderMaterial::new(TRIANGLE_SHADER);
        assert_eq!(material.blend_state(), wgpu::BlendState::REPLACE);
    }

    #[test]
    fn test_normal_blending_factors() {
        let state = Blending::Normal.blend_state();
        assert_eq!(state.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
    }

    #[test]
    fn test_shader_declares_entry_points() {
        assert!(TRIANGLE_SHADER.contains("fn vs_main"));
        assert!(TRIANGLE_SHADER.contains("fn fs_main"));
        assert!(TRIANGLE_SHADER.contains("opacity"));
    }
}
