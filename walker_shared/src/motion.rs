//! Per-frame motion resolution.
//!
//! Each tick, the held steering keys are combined into a single
//! [`MotionDelta`]: translation contributions from every held key are summed,
//! while the facing target is whichever held direction is evaluated last in
//! the fixed order Up, Down, Left, Right.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::{
    input::{Direction, InputState},
    math::Vec3,
};

impl Direction {
    /// Unit translation contribution of this direction.
    pub fn unit(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::new(0.0, 0.0, -1.0),
            Direction::Down => Vec3::new(0.0, 0.0, 1.0),
            Direction::Left => Vec3::new(-1.0, 0.0, 0.0),
            Direction::Right => Vec3::new(1.0, 0.0, 0.0),
        }
    }

    /// Facing angle (radians about the vertical axis) the avatar turns
    /// toward while this direction is held.
    pub fn facing_angle(self) -> f32 {
        match self {
            Direction::Up => PI,
            Direction::Down => 0.0,
            Direction::Left => -FRAC_PI_2,
            Direction::Right => FRAC_PI_2,
        }
    }
}

/// One frame's worth of motion. Recomputed every tick, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionDelta {
    pub translation: Vec3,
    /// `None` when no key is held; facing then keeps its last value.
    pub target_angle: Option<f32>,
}

/// Combines the held keys into a translation and a facing target.
///
/// Directions are evaluated in the fixed order Up, Down, Left, Right. Each
/// held direction adds its unit contribution scaled by `step_size`, and
/// overwrites the facing target set by earlier directions, so with several
/// keys held the last-evaluated one wins the facing while translations sum.
/// The override order is a deliberate behavior choice; keep it stable.
pub fn resolve(input: &InputState, step_size: f32) -> MotionDelta {
    let mut delta = MotionDelta::default();
    for direction in Direction::ALL {
        if input.is_held(direction) {
            delta.translation += direction.unit().scale(step_size);
            delta.target_angle = Some(direction.facing_angle());
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_yields_zero_delta() {
        let input = InputState::default();
        for step in [0.1, 1.0, 42.0] {
            let delta = resolve(&input, step);
            assert_eq!(delta.translation, Vec3::ZERO);
            assert_eq!(delta.target_angle, None);
        }
    }

    #[test]
    fn up_only_moves_forward_and_faces_pi() {
        let mut input = InputState::default();
        input.set_held(Direction::Up, true);
        let delta = resolve(&input, 0.1);
        assert_eq!(delta.translation, Vec3::new(0.0, 0.0, -0.1));
        assert_eq!(delta.target_angle, Some(PI));
    }

    #[test]
    fn up_and_right_sum_translation_right_wins_facing() {
        let mut input = InputState::default();
        input.set_held(Direction::Up, true);
        input.set_held(Direction::Right, true);
        let delta = resolve(&input, 0.1);
        assert_eq!(delta.translation, Vec3::new(0.1, 0.0, -0.1));
        assert_eq!(delta.target_angle, Some(FRAC_PI_2));
    }

    #[test]
    fn up_and_down_cancel_translation_down_wins_facing() {
        let mut input = InputState::default();
        input.set_held(Direction::Up, true);
        input.set_held(Direction::Down, true);
        let delta = resolve(&input, 0.5);
        assert_eq!(delta.translation, Vec3::ZERO);
        assert_eq!(delta.target_angle, Some(0.0));
    }

    #[test]
    fn all_keys_held_right_wins_facing() {
        let mut input = InputState::default();
        for direction in Direction::ALL {
            input.set_held(direction, true);
        }
        let delta = resolve(&input, 0.1);
        assert_eq!(delta.translation, Vec3::ZERO);
        assert_eq!(delta.target_angle, Some(FRAC_PI_2));
    }
}
