use core::ops::Neg;

use serde::{Deserialize, Serialize};

use super::{lit, Time, Vec3, Vec4};

/// Rotation quaternion (x, y, z, w)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat<F = f32> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Time> Default for Quat<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Time> Quat<F> {
    #[inline]
    pub fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(F::zero(), F::zero(), F::zero(), F::one())
    }

    /// Rotation of `angle` radians around `axis` (normalized here).
    pub fn from_axis_angle(axis: Vec3<F>, angle: F) -> Self {
        let axis = axis.normalize();
        let half = angle * lit(0.5);
        let (s, c) = half.sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    #[inline]
    pub fn to_array(self) -> [F; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    fn as_vec4(self) -> Vec4<F> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    #[inline]
    fn from_vec4(v: Vec4<F>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.as_vec4().dot(other.as_vec4())
    }

    #[inline]
    pub fn length(self) -> F {
        self.as_vec4().length()
    }

    /// Unit-length copy; a zero (or non-finite) quaternion becomes identity.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > F::zero() && len.is_finite() {
            Self::from_vec4(self.as_vec4() * len.recip())
        } else {
            Self::identity()
        }
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// `u` is not clamped: values outside `[0, 1]` keep rotating past the
    /// endpoints; a non-finite `u` returns `self` normalized. The result is
    /// always unit length.
    pub fn slerp(self, other: Self, u: F) -> Self {
        let a = self.normalize();
        if !u.is_finite() {
            return a;
        }
        let mut b = other.normalize();
        let mut cos = a.dot(b);
        if cos < F::zero() {
            b = -b;
            cos = -cos;
        }

        // Nearly parallel: sin(theta) underflows, fall back to NLERP.
        if cos > lit(0.9995) {
            let lerped = a.as_vec4() + (b.as_vec4() - a.as_vec4()) * u;
            return Self::from_vec4(lerped).normalize();
        }

        let theta = cos.min(F::one()).acos();
        let inv_sin = theta.sin().recip();
        let wa = ((F::one() - u) * theta).sin() * inv_sin;
        let wb = (u * theta).sin() * inv_sin;
        Self::from_vec4(a.as_vec4() * wa + b.as_vec4() * wb).normalize()
    }

    /// Angle between two rotations in radians, in `[0, pi]`.
    pub fn angle_to(self, other: Self) -> F {
        let cos = self.normalize().dot(other.normalize()).abs().min(F::one());
        cos.acos() * lit(2.0)
    }
}

impl<F: Time> Neg for Quat<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<F: Time> From<[F; 4]> for Quat<F> {
    #[inline]
    fn from(q: [F; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn z_rot(angle: f32) -> Quat {
        Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), angle)
    }

    #[test]
    fn slerp_halfway_is_half_angle() {
        let mid = Quat::identity().slerp(z_rot(FRAC_PI_2), 0.5);
        assert_relative_eq!(Quat::identity().angle_to(mid), FRAC_PI_4, epsilon = 1e-5);
        assert_relative_eq!(mid.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn slerp_takes_shortest_arc() {
        let a = z_rot(0.1);
        let b = -z_rot(0.3); // same rotation, opposite hemisphere
        let mid = a.slerp(b, 0.5);
        assert_relative_eq!(a.angle_to(mid), 0.1, epsilon = 1e-4);
    }

    #[test]
    fn slerp_endpoints() {
        let a = z_rot(0.2);
        let b = z_rot(PI * 0.75);
        assert_relative_eq!(a.angle_to(a.slerp(b, 0.0)), 0.0, epsilon = 1e-3);
        assert_relative_eq!(b.angle_to(a.slerp(b, 1.0)), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn zero_quaternion_normalizes_to_identity() {
        let q = Quat::new(0.0f64, 0.0, 0.0, 0.0).normalize();
        assert_eq!(q, Quat::identity());
    }
}
