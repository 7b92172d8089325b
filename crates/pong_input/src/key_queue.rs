//! Buffered key presses between frames
//!
//! winit delivers events through callbacks; the loop wants to poll. `KeyQueue`
//! sits in between: window events go in as they arrive and the loop drains
//! them once per frame.
//!
//! Only fresh key presses are queued. Releases, auto-repeat, mouse input and
//! window events (close requests included) are dropped, so closing the window
//! does not stop the loop.

use std::collections::VecDeque;

use pong_core::{InputPort, Key};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::map_key_code;

/// FIFO of key presses waiting for the next poll
#[derive(Debug, Default)]
pub struct KeyQueue {
    pending: VecDeque<Key>,
}

impl KeyQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of presses waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no presses are waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue a keyboard event
    ///
    /// Returns true if a press was queued.
    pub fn push_key_event(&mut self, key: PhysicalKey, state: ElementState, repeat: bool) -> bool {
        if state != ElementState::Pressed || repeat {
            return false;
        }

        let key = match key {
            PhysicalKey::Code(code) => map_key_code(code),
            PhysicalKey::Unidentified(_) => Key::Other,
        };
        log::trace!("Queued {:?}", key);
        self.pending.push_back(key);
        true
    }

    /// Offer any window event; only keyboard presses are kept
    ///
    /// Returns true if a press was queued.
    pub fn push_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.push_key_event(event.physical_key, event.state, event.repeat)
            }
            _ => false,
        }
    }
}

impl InputPort for KeyQueue {
    fn drain_key_presses(&mut self) -> Vec<Key> {
        self.pending.drain(..).collect()
    }
}
