//! Physical key bindings

use pong_core::Key;
use winit::keyboard::KeyCode;

/// Map a physical key to the loop's key vocabulary
///
/// WASD moves, Escape quits. Everything else is [`Key::Other`].
pub fn map_key_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::KeyW => Key::Up,
        KeyCode::KeyS => Key::Down,
        KeyCode::KeyA => Key::Left,
        KeyCode::KeyD => Key::Right,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_bindings() {
        assert_eq!(map_key_code(KeyCode::KeyW), Key::Up);
        assert_eq!(map_key_code(KeyCode::KeyS), Key::Down);
        assert_eq!(map_key_code(KeyCode::KeyA), Key::Left);
        assert_eq!(map_key_code(KeyCode::KeyD), Key::Right);
    }

    #[test]
    fn test_escape_binding() {
        assert_eq!(map_key_code(KeyCode::Escape), Key::Escape);
    }

    #[test]
    fn test_unbound_keys() {
        // Arrow keys are not bound
        for code in [KeyCode::ArrowUp, KeyCode::Space, KeyCode::KeyQ, KeyCode::Enter] {
            assert_eq!(map_key_code(code), Key::Other, "Key {:?} should be unbound", code);
        }
    }
}
