/// Monotonic elapsed-time source driving the animation
pub trait TimeSource {
    /// Seconds elapsed since the source was started or last reset
    fn elapsed_secs(&self) -> f64;

    /// Restart the source at zero
    fn reset(&mut self);
}
