//! circle_pong - a window with one circle moved by WASD
//!
//! The loop logic lives in `pong_core`; this crate wires it to winit and wgpu
//! and loads configuration.

pub mod config;
pub mod systems;
