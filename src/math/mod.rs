mod color;
mod pulse;

pub use color::{rgb_from_hex, to_wgpu_color};
pub use pulse::pulse_opacity;
