//! Application systems
//!
//! Thin wrappers that connect the platform-free loop to winit and wgpu.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationSystem, StepResult};
pub use window::{WindowError, WindowSystem};
