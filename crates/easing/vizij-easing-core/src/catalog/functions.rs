//! Named, duration-parameterized entry points: `quad_out(t, b, c, d)` and friends.
//!
//! Thin wrappers over [`Easing::ease`] so hosts can call a curve by name
//! without building an [`Easing`] first. Each works for every [`Lanes`] type
//! (floats, signed integers, vectors, arrays) at any [`Time`] precision.

use super::{Easing, Family, Variant};
use crate::interp::Lanes;
use crate::math::Time;

/// `b + c * t / d`
#[inline]
pub fn linear<T, F>(t: F, b: T, c: T, d: F) -> T
where
    F: Time,
    T: Lanes<F>,
{
    Easing::linear().ease(t, b, c, d)
}

macro_rules! family_functions {
    ($($family:ident),* $(,)?) => {
        paste::paste! {$(
            family_functions!(@one [<$family:camel>], Out, [<$family _out>]);
            family_functions!(@one [<$family:camel>], In, [<$family _in>]);
            family_functions!(@one [<$family:camel>], InOut, [<$family _in_out>]);
            family_functions!(@one [<$family:camel>], OutIn, [<$family _out_in>]);
        )*}
    };
    (@one $fam:ident, $variant:ident, $name:ident) => {
        #[doc = concat!("`", stringify!($fam), "` curve, `", stringify!($variant), "` variant: value at elapsed `t` of `d`, from `b` by `c`.")]
        #[inline]
        pub fn $name<T, F>(t: F, b: T, c: T, d: F) -> T
        where
            F: Time,
            T: Lanes<F>,
        {
            Easing::new(Family::$fam, Variant::$variant).ease(t, b, c, d)
        }
    };
}

family_functions!(quad, cubic, quart, quint, sine, expo, circ, elastic, bounce, back);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn quad_out_scenario() {
        assert_eq!(quad_out(0.5f64, 0.0, 10.0, 1.0), 7.5);
    }

    #[test]
    fn bounce_out_endpoints() {
        assert_eq!(bounce_out(0.0f64, 0.0, 1.0, 1.0), 0.0);
        assert_eq!(bounce_out(1.0f64, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn linear_is_exact_for_any_t() {
        for t in [-1.0f64, 0.0, 0.3, 1.0, 2.5] {
            assert_eq!(linear(t, 4.0, 2.0, 2.0), 4.0 + 2.0 * (t / 2.0));
        }
    }

    #[test]
    fn vector_form_matches_scalar_lanes() {
        let b = Vec3::new(1.0f32, -2.0, 0.5);
        let c = Vec3::new(3.0f32, 4.0, -1.0);
        let v = cubic_in_out(0.7f32, b, c, 1.3);
        assert_eq!(v.x, cubic_in_out(0.7f32, b.x, c.x, 1.3));
        assert_eq!(v.y, cubic_in_out(0.7f32, b.y, c.y, 1.3));
        assert_eq!(v.z, cubic_in_out(0.7f32, b.z, c.z, 1.3));
    }

    #[test]
    fn integer_values_truncate() {
        assert_eq!(quad_out(0.5f32, 0i32, 10, 1.0), 7);
        assert_eq!(sine_in(1.0f32, 5i64, 10, 1.0), 15);
    }
}
