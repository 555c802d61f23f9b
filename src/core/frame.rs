/// Frame metadata - frame number, elapsed time and the opacity it was drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f64,
    pub opacity: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f64, opacity: f32) -> Self {
        Self {
            number,
            time,
            opacity,
        }
    }
}
