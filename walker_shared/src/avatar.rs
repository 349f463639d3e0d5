//! Avatar transform state.
//!
//! The avatar is absent until its model finishes loading, so the canonical
//! representation is `Option<AvatarState>`. Once present, the state is owned
//! by the frame loop and mutated exactly once per tick.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::{
    math::{lerp, Vec3},
    motion::MotionDelta,
};

/// Position and facing of the loaded avatar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarState {
    /// World position. The y component starts at half the model height so
    /// the model rests on the floor plane.
    pub position: Vec3,
    /// Rotation about the vertical axis, radians.
    pub facing_angle: f32,
}

impl AvatarState {
    /// Initial state for a freshly loaded model of the given height:
    /// centered on the floor plane, turned to face along +Z.
    pub fn resting(model_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, model_height / 2.0, 0.0),
            facing_angle: PI,
        }
    }
}

/// Applies one frame's motion to the avatar slot.
///
/// A no-op while the model has not loaded. Translation is plain vector
/// addition with no collision or bounds checking. Facing moves toward the
/// target by `rotation_smoothing` per frame, which converges exponentially
/// over successive frames rather than snapping; with no target this frame,
/// facing is unchanged.
pub fn apply_delta(
    avatar: &mut Option<AvatarState>,
    delta: &MotionDelta,
    rotation_smoothing: f32,
) {
    let Some(state) = avatar.as_mut() else {
        return;
    };

    state.position += delta.translation;

    if let Some(target) = delta.target_angle {
        state.facing_angle = lerp(state.facing_angle, target, rotation_smoothing);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::input::{Direction, InputState};
    use crate::motion::resolve;

    #[test]
    fn unloaded_avatar_is_a_no_op() {
        let mut avatar: Option<AvatarState> = None;
        let delta = MotionDelta {
            translation: Vec3::new(1.0, 0.0, 0.0),
            target_angle: Some(0.0),
        };
        apply_delta(&mut avatar, &delta, 0.1);
        assert!(avatar.is_none());
    }

    #[test]
    fn resting_pose_sits_on_the_floor() {
        let state = AvatarState::resting(1.8);
        assert_eq!(state.position, Vec3::new(0.0, 0.9, 0.0));
        assert_eq!(state.facing_angle, PI);
    }

    #[test]
    fn translation_accumulates_without_bounds() {
        let mut avatar = Some(AvatarState::resting(2.0));
        let delta = MotionDelta {
            translation: Vec3::new(0.0, 0.0, 0.5),
            target_angle: None,
        };
        for _ in 0..100 {
            apply_delta(&mut avatar, &delta, 0.1);
        }
        let state = avatar.unwrap();
        assert_eq!(state.position, Vec3::new(0.0, 1.0, 50.0));
        // No target angle on any frame, so facing held its initial value.
        assert_eq!(state.facing_angle, PI);
    }

    #[test]
    fn facing_converges_monotonically_without_reaching_target() {
        let mut avatar = Some(AvatarState::resting(2.0));
        let mut input = InputState::default();
        input.set_held(Direction::Right, true);
        let delta = resolve(&input, 0.1);

        let target = FRAC_PI_2;
        let mut prev_gap = (avatar.unwrap().facing_angle - target).abs();
        for _ in 0..50 {
            apply_delta(&mut avatar, &delta, 0.1);
            let gap = (avatar.unwrap().facing_angle - target).abs();
            assert!(gap < prev_gap, "gap must shrink every frame");
            assert!(gap > 0.0, "finite steps never reach the target exactly");
            prev_gap = gap;
        }
    }

    #[test]
    fn smoothing_of_one_snaps_to_target() {
        let mut avatar = Some(AvatarState::resting(2.0));
        let delta = MotionDelta {
            translation: Vec3::ZERO,
            target_angle: Some(0.0),
        };
        apply_delta(&mut avatar, &delta, 1.0);
        assert_eq!(avatar.unwrap().facing_angle, 0.0);
    }
}
