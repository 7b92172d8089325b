//! Seams between the loop and its backends

use crate::{Color, Key, Position};

/// Source of key presses, polled once per frame
pub trait InputPort {
    /// Take every key press received since the previous call, oldest first
    fn drain_key_presses(&mut self) -> Vec<Key>;
}

/// Plain vectors act as a scripted input source
impl InputPort for Vec<Key> {
    fn drain_key_presses(&mut self) -> Vec<Key> {
        std::mem::take(self)
    }
}

/// Drawable target for a single frame
pub trait Canvas {
    type Error;

    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Draw a filled circle centered at `center` (surface pixels)
    fn fill_circle(&mut self, center: Position, radius: u32, color: Color);

    /// Show what was drawn since the last present
    fn present(&mut self) -> Result<(), Self::Error>;
}
