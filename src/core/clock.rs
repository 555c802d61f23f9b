use std::time::Instant;

use crate::traits::TimeSource;

/// Wall clock measuring seconds since it was started
#[derive(Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn reset(&mut self) {
        self.start = Instant::now();
    }
}

/// Clock advanced by hand, for driving frames with synthetic time
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute time in seconds
    pub fn set(&mut self, seconds: f64) {
        self.now = seconds.max(0.0);
    }

    /// Move forward by `delta` seconds
    pub fn advance(&mut self, delta: f64) {
        self.now += delta.max(0.0);
    }
}

impl TimeSource for ManualClock {
    fn elapsed_secs(&self) -> f64 {
        self.now
    }

    fn reset(&mut self) {
        self.now = 0.0;
    }
}
