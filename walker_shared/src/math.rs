//! Math types.
//!
//! This module intentionally stays small and deterministic.
//! It avoids SIMD/unsafe and carries only what the walk demo uses.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Scalar linear interpolation, unclamped.
///
/// Deliberately does not wrap angles: facing interpolation takes the direct
/// path between the two values. Call sites keep `t` in (0, 1]; values
/// outside that range extrapolate.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_add_assign() {
        let mut a = Vec3::new(1.0, 0.0, -1.0);
        a += Vec3::new(0.5, 0.0, 0.5);
        assert_eq!(a, Vec3::new(1.5, 0.0, -0.5));
    }

    #[test]
    fn vec3_scale() {
        assert_eq!(Vec3::new(0.0, 0.0, -1.0).scale(0.1), Vec3::new(0.0, 0.0, -0.1));
    }

    #[test]
    fn scalar_lerp_partial_step() {
        assert_eq!(lerp(0.0, 10.0, 0.1), 1.0);
        assert_eq!(lerp(5.0, 5.0, 0.3), 5.0);
    }

    #[test]
    fn scalar_lerp_is_unclamped() {
        assert_eq!(lerp(0.0, 1.0, 2.0), 2.0);
        assert_eq!(lerp(1.0, 0.0, -1.0), 2.0);
    }
}
