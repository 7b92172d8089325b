//! Circle drawing pipeline
//!
//! One render pass per frame: clear to the background, then a single quad whose
//! fragment shader discards everything outside the circle.

pub mod types;
pub mod circle_pipeline;

pub use types::{to_wgpu_color, CircleUniforms};
pub use circle_pipeline::CirclePipeline;
