//! Numeric adapters: how a progress factor is applied to a concrete value type.
//!
//! - [`Lanes`]: affine, lane-wise `b + c * k` for scalars, integers, vectors and arrays
//! - [`Interpolate`]: endpoint blend used by the façade and the tween; lane-wise
//!   for every [`Lanes`] type, spherical for [`Quat`] and [`Slerp`]

pub mod spherical;

pub use spherical::{ease_slerp, ease_slerp_direction, Slerp};

use crate::math::{to_f32, to_f64, Quat, Time, Vec2, Vec3, Vec4};

/// Values the catalog can evaluate on directly: `f(t, b, c, d) = b + c * k`.
///
/// Implementations apply the same factor to every lane independently, so a
/// vector result always equals the scalar formula evaluated per lane.
pub trait Lanes<F: Time>: Copy {
    /// `to - from`, lane by lane.
    fn delta(from: Self, to: Self) -> Self;

    /// `b + c * k`, lane by lane.
    fn offset(b: Self, c: Self, k: F) -> Self;
}

/// Blend between two endpoints by a progress factor `k` (0 at `from`, 1 at `to`).
pub trait Interpolate<F: Time>: Clone {
    fn interpolate(from: &Self, to: &Self, k: F) -> Self;
}

impl<F: Time> Lanes<F> for f32 {
    #[inline]
    fn delta(from: Self, to: Self) -> Self {
        to - from
    }

    #[inline]
    fn offset(b: Self, c: Self, k: F) -> Self {
        b + c * to_f32(k)
    }
}

impl<F: Time> Lanes<F> for f64 {
    #[inline]
    fn delta(from: Self, to: Self) -> Self {
        to - from
    }

    #[inline]
    fn offset(b: Self, c: Self, k: F) -> Self {
        b + c * to_f64(k)
    }
}

// Signed integers are eased in f64 and truncated toward zero. `as` saturates at
// the type bounds and maps NaN to 0. `delta` saturates, so `Interpolate` blends
// the endpoints in f64 instead of going through it.
macro_rules! int_lanes {
    ($($int:ty),*) => {$(
        impl<F: Time> Lanes<F> for $int {
            #[inline]
            fn delta(from: Self, to: Self) -> Self {
                to.saturating_sub(from)
            }

            #[inline]
            fn offset(b: Self, c: Self, k: F) -> Self {
                (b as f64 + c as f64 * to_f64(k)) as $int
            }
        }

        impl<F: Time> Interpolate<F> for $int {
            #[inline]
            fn interpolate(from: &Self, to: &Self, k: F) -> Self {
                let from = *from as f64;
                (from + (*to as f64 - from) * to_f64(k)) as $int
            }
        }
    )*};
}

int_lanes!(i8, i16, i32, i64);

macro_rules! vector_lanes {
    ($($vec:ident),*) => {$(
        impl<F: Time, S: Lanes<F>> Lanes<F> for $vec<S> {
            #[inline]
            fn delta(from: Self, to: Self) -> Self {
                from.zip_with(to, S::delta)
            }

            #[inline]
            fn offset(b: Self, c: Self, k: F) -> Self {
                b.zip_with(c, |b, c| S::offset(b, c, k))
            }
        }

        impl<F: Time, S: Interpolate<F> + Copy> Interpolate<F> for $vec<S> {
            #[inline]
            fn interpolate(from: &Self, to: &Self, k: F) -> Self {
                (*from).zip_with(*to, |a, b| S::interpolate(&a, &b, k))
            }
        }
    )*};
}

vector_lanes!(Vec2, Vec3, Vec4);

impl<F: Time, S: Lanes<F>, const N: usize> Lanes<F> for [S; N] {
    fn delta(from: Self, to: Self) -> Self {
        core::array::from_fn(|i| S::delta(from[i], to[i]))
    }

    fn offset(b: Self, c: Self, k: F) -> Self {
        core::array::from_fn(|i| S::offset(b[i], c[i], k))
    }
}

impl<F: Time, S: Interpolate<F>, const N: usize> Interpolate<F> for [S; N] {
    fn interpolate(from: &Self, to: &Self, k: F) -> Self {
        core::array::from_fn(|i| S::interpolate(&from[i], &to[i], k))
    }
}

macro_rules! scalar_interpolate {
    ($($ty:ty),*) => {$(
        impl<F: Time> Interpolate<F> for $ty {
            #[inline]
            fn interpolate(from: &Self, to: &Self, k: F) -> Self {
                <$ty as Lanes<F>>::offset(*from, <$ty as Lanes<F>>::delta(*from, *to), k)
            }
        }
    )*};
}

scalar_interpolate!(f32, f64);

impl<F: Time> Interpolate<F> for Quat<F> {
    /// Always spherical: easing quaternion components lane-wise would leave the
    /// unit sphere.
    #[inline]
    fn interpolate(from: &Self, to: &Self, k: F) -> Self {
        from.slerp(*to, k)
    }
}
