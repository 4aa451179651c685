//! Variant composer: derives the split variants from a family's In and Out shapes.
//!
//! Each half runs its shape over the halved duration `d / 2` with local time
//! starting at 0 and covers half of the progress range. Shapes with constants
//! tied to the duration (Elastic's period and phase) therefore see the halved
//! duration, not the full one.
//!
//! At `t = d / 2` the second half starts at local time 0, where every shape is
//! 0, so both split variants pass through `b + c / 2`.

use super::equations::Shape;
use crate::math::{lit, Time};
use crate::params::CurveParams;

#[inline]
fn split<F: Time>(
    first: Shape<F>,
    second: Shape<F>,
    t: F,
    d: F,
    params: &CurveParams,
) -> F {
    let half_d = d * lit(0.5);
    let half: F = lit(0.5);
    if t < half_d {
        half * first(t, half_d, params)
    } else {
        half + half * second(t - half_d, half_d, params)
    }
}

/// In over `[0, d/2)`, Out over `[d/2, d]`.
#[inline]
pub fn in_out<F: Time>(
    ease_in: Shape<F>,
    ease_out: Shape<F>,
    t: F,
    d: F,
    params: &CurveParams,
) -> F {
    split(ease_in, ease_out, t, d, params)
}

/// Out over `[0, d/2)`, In over `[d/2, d]`.
#[inline]
pub fn out_in<F: Time>(
    ease_out: Shape<F>,
    ease_in: Shape<F>,
    t: F,
    d: F,
    params: &CurveParams,
) -> F {
    split(ease_out, ease_in, t, d, params)
}
