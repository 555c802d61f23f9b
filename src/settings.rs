// settings.rs - Fixed render settings for the pulsing triangle
use crate::camera::OrthographicBounds;
use crate::math::{rgb_from_hex, to_wgpu_color};
use crate::traits::CanvasSize;

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;
pub const CLEAR_COLOR_HEX: u32 = 0x4d7a7a;
pub const CAMERA_DEPTH: f32 = 1.0;

/// Selector of the drawing surface (the window title natively)
pub const DEFAULT_SURFACE_SELECTOR: &str = "pulse-triangle";

/// Everything the renderer needs to know about the canvas and camera
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub size: CanvasSize,
    pub clear_color: wgpu::Color,
    pub bounds: OrthographicBounds,
    pub camera_depth: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: CanvasSize::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            clear_color: to_wgpu_color(rgb_from_hex(CLEAR_COLOR_HEX), 1.0),
            bounds: OrthographicBounds::default(),
            camera_depth: CAMERA_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_is_800_by_600() {
        let settings = RenderSettings::default();
        assert_eq!(settings.size, CanvasSize::new(800, 600));
    }

    #[test]
    fn test_default_clear_color() {
        let c = RenderSettings::default().clear_color;
        assert!((c.r - 0.30).abs() < 0.01);
        assert!((c.g - 0.48).abs() < 0.01);
        assert!((c.b - 0.48).abs() < 0.01);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_default_camera() {
        let settings = RenderSettings::default();
        assert_eq!(settings.camera_depth, 1.0);
        assert_eq!(settings.bounds.near, 0.1);
        assert_eq!(settings.bounds.far, 1000.0);
    }
}
