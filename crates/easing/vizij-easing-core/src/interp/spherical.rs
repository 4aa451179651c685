//! Spherical ("slerp") easing for orientations and unit directions.
//!
//! The scalar curve only reshapes the interpolation parameter,
//! `u = easing(t, 0, 1, d)`; the value itself moves along the great arc between
//! `from` and `to`. Results stay unit length for any `u`, including the
//! overshoot of Back/Elastic and times outside `[0, d]`.

use serde::{Deserialize, Serialize};

use super::Interpolate;
use crate::catalog::Easing;
use crate::math::{lit, Quat, Time, Vec3};

/// Unit-direction wrapper whose [`Interpolate`] impl is spherical instead of
/// lane-wise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slerp<V>(pub V);

impl<V> Slerp<V> {
    #[inline]
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<F: Time> Slerp<Vec3<F>> {
    /// Spherical interpolation between two directions (normalized here).
    ///
    /// Antipodal inputs rotate through an arbitrary perpendicular axis.
    /// Zero-length inputs have no direction and yield the zero vector. A
    /// non-finite `u` returns `self` normalized.
    pub fn slerp(self, other: Self, u: F) -> Self {
        let a = self.0.normalize();
        let b = other.0.normalize();
        if a.length() == F::zero() || b.length() == F::zero() {
            return Slerp(Vec3::splat(F::zero()));
        }
        if !u.is_finite() {
            return Slerp(a);
        }

        let threshold: F = lit(0.9995);
        let cos = a.dot(b).max(-F::one()).min(F::one());
        if cos > threshold {
            let lerped = (a + (b - a) * u).normalize();
            return Slerp(if lerped.length() > F::zero() { lerped } else { a });
        }

        let (theta, perp) = if cos < -threshold {
            (F::PI(), a.any_orthogonal())
        } else {
            (cos.acos(), (b - a * cos).normalize())
        };
        let (s, c) = (theta * u).sin_cos();
        Slerp((a * c + perp * s).normalize())
    }
}

impl<F: Time> Interpolate<F> for Slerp<Vec3<F>> {
    #[inline]
    fn interpolate(from: &Self, to: &Self, k: F) -> Self {
        from.slerp(*to, k)
    }
}

/// Eases an orientation: reshapes `t / d` with `easing`, then slerps.
#[inline]
pub fn ease_slerp<F: Time>(easing: Easing, t: F, from: Quat<F>, to: Quat<F>, d: F) -> Quat<F> {
    from.slerp(to, easing.factor(t, d))
}

/// Eases a unit direction: reshapes `t / d` with `easing`, then slerps.
#[inline]
pub fn ease_slerp_direction<F: Time>(
    easing: Easing,
    t: F,
    from: Vec3<F>,
    to: Vec3<F>,
    d: F,
) -> Vec3<F> {
    Slerp(from).slerp(Slerp(to), easing.factor(t, d)).0
}
