//! Mutable loop state: circle position and the running flag

use crate::{Key, Position};

/// Default pixels moved per key press
pub const DEFAULT_SPEED: i32 = 5;

/// State carried from frame to frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopState {
    position: Position,
    running: bool,

    // Configuration
    pub speed: i32,
}

impl LoopState {
    /// Start at the center of a `width` x `height` surface, running
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Position::centered(width, height),
            running: true,
            speed: DEFAULT_SPEED,
        }
    }

    /// Builder: set pixels moved per key press
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    /// Builder: override the starting position
    #[cfg(test)]
    fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Current circle center
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply a single key press
    ///
    /// Returns true if the position changed. Escape only clears the running flag;
    /// the position is left untouched.
    pub fn apply_key(&mut self, key: Key) -> bool {
        if key == Key::Escape {
            self.running = false;
            log::debug!("Escape pressed, stopping after this frame");
            return false;
        }

        match key.direction() {
            Some((dx, dy)) => {
                self.position
                    .translate(dx.wrapping_mul(self.speed), dy.wrapping_mul(self.speed));
                log::debug!("{:?} -> ({}, {})", key, self.position.x, self.position.y);
                true
            }
            None => false,
        }
    }

    /// Apply key presses in the order received
    ///
    /// Keys after an Escape in the same batch are still applied.
    pub fn apply_keys<I: IntoIterator<Item = Key>>(&mut self, keys: I) {
        for key in keys {
            self.apply_key(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered_and_running() {
        let state = LoopState::new(800, 600);
        assert_eq!(state.position(), Position::new(400, 300));
        assert!(state.is_running());
        assert_eq!(state.speed, DEFAULT_SPEED);
    }

    #[test]
    fn test_movement_keys() {
        let mut state = LoopState::new(800, 600);
        assert!(state.apply_key(Key::Right));
        assert_eq!(state.position(), Position::new(405, 300));
        assert!(state.apply_key(Key::Up));
        assert_eq!(state.position(), Position::new(405, 295));
        assert!(state.apply_key(Key::Left));
        assert!(state.apply_key(Key::Down));
        assert_eq!(state.position(), Position::new(400, 300));
    }

    #[test]
    fn test_other_key_ignored() {
        let mut state = LoopState::new(800, 600);
        assert!(!state.apply_key(Key::Other));
        assert_eq!(state.position(), Position::new(400, 300));
        assert!(state.is_running());
    }

    #[test]
    fn test_escape_stops_without_moving() {
        let mut state = LoopState::new(800, 600);
        assert!(!state.apply_key(Key::Escape));
        assert!(!state.is_running());
        assert_eq!(state.position(), Position::new(400, 300));
    }

    #[test]
    fn test_keys_after_escape_still_apply() {
        let mut state = LoopState::new(800, 600);
        state.apply_keys([Key::Escape, Key::Right]);
        assert!(!state.is_running());
        assert_eq!(state.position(), Position::new(405, 300));
    }

    #[test]
    fn test_custom_speed() {
        let mut state = LoopState::new(100, 100).with_speed(12);
        state.apply_keys([Key::Down, Key::Down]);
        assert_eq!(state.position(), Position::new(50, 74));
    }

    #[test]
    fn test_vector_sum_of_presses() {
        let keys = [
            Key::Right, Key::Right, Key::Up, Key::Left, Key::Down, Key::Down,
            Key::Other, Key::Right, Key::Down,
        ];
        let mut state = LoopState::new(800, 600);
        state.apply_keys(keys);

        let (sx, sy) = keys
            .iter()
            .filter_map(|k| k.direction())
            .fold((0, 0), |(ax, ay), (dx, dy)| (ax + dx, ay + dy));
        assert_eq!(
            state.position(),
            Position::new(400 + sx * DEFAULT_SPEED, 300 + sy * DEFAULT_SPEED)
        );
    }

    #[test]
    fn test_no_clamping_at_edges() {
        let mut state = LoopState::new(10, 10).with_position(Position::new(0, 0));
        state.apply_keys([Key::Left, Key::Up]);
        assert_eq!(state.position(), Position::new(-5, -5));
    }
}
