//! Keyboard input for circle_pong
//!
//! Turns winit keyboard events into [`pong_core::Key`] presses and buffers them
//! until the loop polls.

mod key_map;
mod key_queue;

pub use key_map::map_key_code;
pub use key_queue::KeyQueue;
