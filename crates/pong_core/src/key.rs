//! Semantic key presses

/// A key press as seen by the loop
///
/// The input backend decides which physical keys map to which variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Stop the loop
    Escape,
    /// Move up (y decreases)
    Up,
    /// Move down (y increases)
    Down,
    /// Move left (x decreases)
    Left,
    /// Move right (x increases)
    Right,
    /// Any key the loop does not react to
    Other,
}

impl Key {
    /// Unit step for movement keys, `None` for everything else
    pub fn direction(self) -> Option<(i32, i32)> {
        match self {
            Key::Up => Some((0, -1)),
            Key::Down => Some((0, 1)),
            Key::Left => Some((-1, 0)),
            Key::Right => Some((1, 0)),
            Key::Escape | Key::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_axis_aligned() {
        assert_eq!(Key::Up.direction(), Some((0, -1)));
        assert_eq!(Key::Down.direction(), Some((0, 1)));
        assert_eq!(Key::Left.direction(), Some((-1, 0)));
        assert_eq!(Key::Right.direction(), Some((1, 0)));
    }

    #[test]
    fn test_non_movement_keys() {
        assert_eq!(Key::Escape.direction(), None);
        assert_eq!(Key::Other.direction(), None);
    }
}
