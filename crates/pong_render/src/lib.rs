//! wgpu rendering for circle_pong
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::CirclePipeline`] - Clears the surface and fills one circle
//! - [`pipeline::CircleUniforms`] - Per-frame circle parameters in surface pixels

pub mod context;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use pipeline::{to_wgpu_color, CirclePipeline, CircleUniforms};
