//! Minimal local vector/quaternion types and the floating-point time abstraction.
//!
//! These stand in for engine math types so the catalog does not depend on any
//! particular host runtime. Adapters convert at the boundary.

pub mod quat;
pub mod vec;

pub use quat::Quat;
pub use vec::{Vec2, Vec3, Vec4};

use core::fmt::Debug;

use num_traits::{Float, FloatConst, NumCast, ToPrimitive};

/// Floating-point type used for elapsed time, duration and progress factors.
pub trait Time: Float + FloatConst + Debug + Default + Send + Sync + 'static {}

impl<F> Time for F where F: Float + FloatConst + Debug + Default + Send + Sync + 'static {}

/// Converts an `f64` constant into the working precision.
#[inline]
pub(crate) fn lit<F: Time>(x: f64) -> F {
    <F as NumCast>::from(x).unwrap_or_else(F::nan)
}

#[inline]
pub(crate) fn to_f64<F: Time>(x: F) -> f64 {
    ToPrimitive::to_f64(&x).unwrap_or(f64::NAN)
}

#[inline]
pub(crate) fn to_f32<F: Time>(x: F) -> f32 {
    ToPrimitive::to_f32(&x).unwrap_or(f32::NAN)
}
