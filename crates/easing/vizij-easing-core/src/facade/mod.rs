//! Normalized façade: `ease(from, to, t)` with `t` in `[0, 1]`.
//!
//! Delegates to the catalog with `d = 1`. `t` outside `[0, 1]` is accepted and
//! extrapolates like the underlying formula.

pub mod functions;

use crate::catalog::Easing;
use crate::interp::Interpolate;
use crate::math::Time;

/// Value of `easing` between `from` and `to` at normalized time `t`.
///
/// Lane-wise for scalars and vectors, spherical for [`crate::Quat`] and
/// [`crate::Slerp`].
#[inline]
pub fn ease<T, F>(easing: Easing, from: T, to: T, t: F) -> T
where
    F: Time,
    T: Interpolate<F>,
{
    T::interpolate(&from, &to, easing.factor(t, F::one()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Family, Quat, Variant, Vec3};
    use approx::assert_relative_eq;

    #[test]
    fn matches_duration_form_at_unit_duration() {
        for easing in Easing::ALL {
            let direct = easing.ease(0.37f64, 2.0, 6.0, 1.0);
            assert_eq!(ease(easing, 2.0f64, 8.0, 0.37f64), direct, "{easing}");
        }
    }

    #[test]
    fn quaternions_are_slerped() {
        let to = Quat::from_axis_angle(Vec3::new(1.0f64, 0.0, 0.0), 1.2);
        let q = ease(Easing::new(Family::Elastic, Variant::Out), Quat::identity(), to, 0.2f64);
        assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);
    }
}
