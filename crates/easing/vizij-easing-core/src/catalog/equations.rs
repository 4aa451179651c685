//! Canonical In/Out shapes for every family, in progress-factor form.
//!
//! Each shape maps elapsed `t` and duration `d` to `k`, where the full
//! equation is `f(t, b, c, d) = b + c * k`. Shapes are total over IEEE floats:
//! nothing guards `d = 0`, and `t` outside `[0, d]` extrapolates.

use super::Family;
use crate::math::{lit, Time};
use crate::params::CurveParams;

/// Progress-factor form of one easing equation.
pub type Shape<F> = fn(F, F, &CurveParams) -> F;

/// The `(In, Out)` shape pair for a family. Linear returns itself twice.
pub fn shapes<F: Time>(family: Family) -> (Shape<F>, Shape<F>) {
    match family {
        Family::Linear => (linear as Shape<F>, linear as Shape<F>),
        Family::Quad => (quad_in as Shape<F>, quad_out as Shape<F>),
        Family::Cubic => (cubic_in as Shape<F>, cubic_out as Shape<F>),
        Family::Quart => (quart_in as Shape<F>, quart_out as Shape<F>),
        Family::Quint => (quint_in as Shape<F>, quint_out as Shape<F>),
        Family::Sine => (sine_in as Shape<F>, sine_out as Shape<F>),
        Family::Expo => (expo_in as Shape<F>, expo_out as Shape<F>),
        Family::Circ => (circ_in as Shape<F>, circ_out as Shape<F>),
        Family::Elastic => (elastic_in as Shape<F>, elastic_out as Shape<F>),
        Family::Bounce => (bounce_in as Shape<F>, bounce_out as Shape<F>),
        Family::Back => (back_in as Shape<F>, back_out as Shape<F>),
    }
}

#[inline]
pub fn linear<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    t / d
}

// ---- polynomial --------------------------------------------------------------

#[inline]
pub fn quad_in<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    let u = t / d;
    u * u
}

#[inline]
pub fn quad_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    let u = t / d;
    -u * (u - lit(2.0))
}

#[inline]
pub fn cubic_in<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    let u = t / d;
    u * u * u
}

#[inline]
pub fn cubic_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    let u = t / d - F::one();
    u * u * u + F::one()
}

#[inline]
pub fn quart_in<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    (t / d).powi(4)
}

#[inline]
pub fn quart_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    -((t / d - F::one()).powi(4) - F::one())
}

#[inline]
pub fn quint_in<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    (t / d).powi(5)
}

#[inline]
pub fn quint_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    (t / d - F::one()).powi(5) + F::one()
}

// ---- trigonometric / exponential ---------------------------------------------

#[inline]
pub fn sine_in<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    F::one() - (t / d * F::FRAC_PI_2()).cos()
}

#[inline]
pub fn sine_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    (t / d * F::FRAC_PI_2()).sin()
}

/// `2^(10(u-1))` never reaches 0, so `t = 0` is pinned explicitly.
#[inline]
pub fn expo_in<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    if t == F::zero() {
        return F::zero();
    }
    lit::<F>(2.0).powf(lit::<F>(10.0) * (t / d - F::one()))
}

/// `1 - 2^(-10u)` never reaches 1, so `t = d` is pinned explicitly.
#[inline]
pub fn expo_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    if t == d {
        return F::one();
    }
    F::one() - lit::<F>(2.0).powf(lit::<F>(-10.0) * t / d)
}

#[inline]
pub fn circ_in<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    let u = t / d;
    -((F::one() - u * u).sqrt() - F::one())
}

#[inline]
pub fn circ_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    let u = t / d - F::one();
    (F::one() - u * u).sqrt()
}

// ---- elastic -----------------------------------------------------------------

#[inline]
fn two_pi<F: Time>() -> F {
    F::PI() + F::PI()
}

/// Period `p` and phase `s` for a duration. Both scale with `d`, so a composed
/// variant passing the halved duration gets halved constants.
#[inline]
fn elastic_constants<F: Time>(d: F, params: &CurveParams) -> (F, F, F) {
    let p = lit::<F>(params.elastic.period) * d;
    let a = lit::<F>(params.elastic.amplitude);
    if a <= F::one() {
        (p, F::one(), p / lit(4.0))
    } else {
        (p, a, p / two_pi::<F>() * a.recip().asin())
    }
}

#[inline]
pub fn elastic_in<F: Time>(t: F, d: F, params: &CurveParams) -> F {
    if t == F::zero() {
        return F::zero();
    }
    let u = t / d;
    if u == F::one() {
        return F::one();
    }
    let (p, a, s) = elastic_constants(d, params);
    let u = u - F::one();
    -(a * lit::<F>(2.0).powf(lit::<F>(10.0) * u) * ((u * d - s) * two_pi::<F>() / p).sin())
}

#[inline]
pub fn elastic_out<F: Time>(t: F, d: F, params: &CurveParams) -> F {
    if t == F::zero() {
        return F::zero();
    }
    let u = t / d;
    if u == F::one() {
        return F::one();
    }
    let (p, a, s) = elastic_constants(d, params);
    a * lit::<F>(2.0).powf(lit::<F>(-10.0) * u) * ((u * d - s) * two_pi::<F>() / p).sin() + F::one()
}

// ---- bounce ------------------------------------------------------------------

#[inline]
pub fn bounce_out<F: Time>(t: F, d: F, _: &CurveParams) -> F {
    let n: F = lit(7.5625);
    let step: F = lit(2.75);
    let u = t / d;
    if u < F::one() / step {
        n * u * u
    } else if u < lit::<F>(2.0) / step {
        let u = u - lit::<F>(1.5) / step;
        n * u * u + lit(0.75)
    } else if u < lit::<F>(2.5) / step {
        let u = u - lit::<F>(2.25) / step;
        n * u * u + lit(0.9375)
    } else {
        let u = u - lit::<F>(2.625) / step;
        n * u * u + lit(0.984375)
    }
}

/// Exact time reversal of [`bounce_out`]: `1 - out(d - t)`.
#[inline]
pub fn bounce_in<F: Time>(t: F, d: F, params: &CurveParams) -> F {
    F::one() - bounce_out(d - t, d, params)
}

// ---- back --------------------------------------------------------------------

#[inline]
pub fn back_in<F: Time>(t: F, d: F, params: &CurveParams) -> F {
    let s = lit::<F>(params.back.overshoot);
    let u = t / d;
    // u^2 * ((s + 1) * u - s), grouped so u = 1 lands exactly on 1.
    u * u * (s * (u - F::one()) + u)
}

#[inline]
pub fn back_out<F: Time>(t: F, d: F, params: &CurveParams) -> F {
    let s = lit::<F>(params.back.overshoot);
    let u = t / d - F::one();
    u * u * (s * (u + F::one()) + u) + F::one()
}
