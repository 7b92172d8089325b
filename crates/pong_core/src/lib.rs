//! Core loop logic for circle_pong
//!
//! Everything here is independent of the windowing and GPU backends:
//!
//! - [`Position`] - Integer circle center in surface pixels
//! - [`Key`] - Semantic key presses the loop reacts to
//! - [`LoopState`] - Position plus the running flag
//! - [`FrameClock`] - Caps the loop at a target frame rate
//! - [`InputPort`] / [`Canvas`] - Seams implemented by the input and render crates
//! - [`GameLoop`] - One poll/update/draw/pace cycle per call

mod color;
mod position;
mod key;
mod loop_state;
mod frame_clock;
mod ports;
mod game_loop;

pub use color::Color;
pub use position::Position;
pub use key::Key;
pub use loop_state::{LoopState, DEFAULT_SPEED};
pub use frame_clock::{FrameClock, DEFAULT_FPS};
pub use ports::{Canvas, InputPort};
pub use game_loop::{CircleStyle, FrameOutcome, GameLoop, DEFAULT_RADIUS};
