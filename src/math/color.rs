/// Convert a packed `0xRRGGBB` value into unit-range RGB components
pub const fn rgb_from_hex(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;

    [r, g, b]
}

/// Build a `wgpu::Color` from RGB components and an alpha
pub fn to_wgpu_color(rgb: [f32; 3], alpha: f32) -> wgpu::Color {
    wgpu::Color {
        r: rgb[0] as f64,
        g: rgb[1] as f64,
        b: rgb[2] as f64,
        a: alpha as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex_primaries() {
        assert_eq!(rgb_from_hex(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(rgb_from_hex(0x00ff00), [0.0, 1.0, 0.0]);
        assert_eq!(rgb_from_hex(0x0000ff), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rgb_from_hex_clear_color() {
        let rgb = rgb_from_hex(0x4d7a7a);
        assert!((rgb[0] - 0.30).abs() < 0.01);
        assert!((rgb[1] - 0.48).abs() < 0.01);
        assert!((rgb[2] - 0.48).abs() < 0.01);
    }

    #[test]
    fn test_rgb_from_hex_ignores_high_byte() {
        assert_eq!(rgb_from_hex(0xff000000), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_to_wgpu_color() {
        let color = to_wgpu_color([0.5, 0.25, 1.0], 1.0);
        assert_eq!(color.r, 0.5);
        assert_eq!(color.g, 0.25);
        assert_eq!(color.b, 1.0);
        assert_eq!(color.a, 1.0);
    }
}
