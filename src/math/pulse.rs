/// Opacity of the pulsing effect at `elapsed` seconds.
///
/// Oscillates as `sin(t) / 2 + 0.5`: starts at 0.5 and rises, peaks at 1.0 at t = pi/2,
/// bottoms out at 0.0 at t = 3pi/2, period 2pi. The result is clamped so floating point
/// error can never leave `[0, 1]`.
///
/// Takes `f64` seconds; only the final opacity is narrowed to `f32`.
pub fn pulse_opacity(elapsed: f64) -> f32 {
    (elapsed.sin() / 2.0 + 0.5).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_starts_at_half() {
        assert_eq!(pulse_opacity(0.0), 0.5);
    }

    #[test]
    fn test_peak_and_trough() {
        assert!((pulse_opacity(FRAC_PI_2) - 1.0).abs() < 1e-6);
        assert!(pulse_opacity(3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_rises_after_start() {
        assert!(pulse_opacity(0.1) > pulse_opacity(0.0));
    }

    #[test]
    fn test_period() {
        for t in [0.3_f64, 1.0, 2.5, PI] {
            assert!((pulse_opacity(t) - pulse_opacity(t + TAU)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_resolves_frames_after_days() {
        let start = 12.0 * 24.0 * 3600.0;
        let frame = 1.0 / 60.0;

        let opacities: Vec<f32> = (0..8)
            .map(|i| pulse_opacity(start + i as f64 * frame))
            .collect();

        for pair in opacities.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
