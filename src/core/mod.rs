pub mod clock;
pub mod frame;
pub mod gpu_context;
pub mod surface_renderer;
pub mod window;

pub use clock::{Clock, ManualClock};
pub use frame::FrameInfo;
pub use gpu_context::GpuContext;
pub use surface_renderer::SurfaceRenderer;
pub use window::WinitSurfaceProvider;
