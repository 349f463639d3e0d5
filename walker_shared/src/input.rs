//! Input handling.
//!
//! In a real engine this would integrate with windowing, raw mouse/keyboard,
//! action bindings, and per-frame sampling. Here the scope is the four arrow
//! keys that steer the avatar: key-down and key-up events set and clear held
//! flags, and the frame loop samples the flags once per tick.

use serde::{Deserialize, Serialize};

/// The four steering directions, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Evaluation order used by motion resolution. Later entries override
    /// earlier ones when picking the facing target.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Maps a named key to a direction. Unrecognized keys map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Held flags for the four steering keys.
///
/// Created once at startup with everything released; key-down/key-up events
/// mutate it for the life of the process. Simultaneous holds are allowed and
/// every held key stays held until its release event arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    /// Records whether a direction key is held.
    pub fn set_held(&mut self, direction: Direction, held: bool) {
        self.held[direction.index()] = held;
    }

    /// Applies a named key event. Unrecognized key names are silently
    /// ignored; this is not an error.
    pub fn apply_key(&mut self, key: &str, held: bool) {
        if let Some(direction) = Direction::from_key(key) {
            self.set_held(direction, held);
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held[direction.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_release_returns_to_default() {
        for direction in Direction::ALL {
            let mut input = InputState::default();
            input.set_held(direction, true);
            assert!(input.is_held(direction));
            input.set_held(direction, false);
            assert_eq!(input, InputState::default());
        }
    }

    #[test]
    fn unrecognized_key_is_ignored() {
        let mut input = InputState::default();
        input.apply_key("Escape", true);
        assert_eq!(input, InputState::default());
        input.apply_key("w", true);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        let mut input = InputState::default();
        input.apply_key("ArrowLeft", true);
        assert!(input.is_held(Direction::Left));
        input.apply_key("ArrowLeft", false);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn simultaneous_holds_are_independent() {
        let mut input = InputState::default();
        input.set_held(Direction::Up, true);
        input.set_held(Direction::Right, true);
        assert!(input.is_held(Direction::Up));
        assert!(input.is_held(Direction::Right));
        input.set_held(Direction::Up, false);
        assert!(input.is_held(Direction::Right));
    }
}
