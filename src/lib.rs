pub mod camera;
pub mod cli;
pub mod context;
pub mod core;
pub mod geometry;
pub mod material;
pub mod math;
pub mod scene;
pub mod settings;
pub mod traits;

pub use context::{InitError, RenderContext};
