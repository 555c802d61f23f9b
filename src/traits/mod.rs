pub mod clock;
pub mod renderer;
pub mod window;

pub use clock::*;
pub use renderer::*;
pub use window::*;
