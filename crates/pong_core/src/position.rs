//! Integer position of the circle center

/// Circle center in surface pixels (origin top-left, y down)
///
/// Never clamped to the surface: the circle can be driven off-screen and stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Geometric center of a `width` x `height` surface (integer division)
    pub fn centered(width: u32, height: u32) -> Self {
        Self {
            x: (width / 2) as i32,
            y: (height / 2) as i32,
        }
    }

    /// Move by `(dx, dy)`
    pub fn translate(&mut self, dx: i32, dy: i32) {
        // Wrap instead of panicking in debug builds; there is no clamp.
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }
}
