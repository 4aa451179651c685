//! Curve selection for the tween and façade, including externally sampled curves.
//!
//! A host may author a curve as an asset instead of picking a catalog formula.
//! The asset is consumed through [`CurveSampler`]: normalized time in, progress
//! multiplier out. This crate never inspects the asset itself.

use core::fmt;
use std::sync::Arc;

use crate::catalog::{Easing, Family};
use crate::math::{lit, to_f32, Time};
use crate::params::CurveParams;

/// Externally authored curve: maps normalized time to a progress multiplier.
///
/// Expected (not enforced) to return 0 at 0 and 1 at 1.
pub trait CurveSampler: Send + Sync {
    fn sample(&self, t: f32) -> f32;
}

impl<G> CurveSampler for G
where
    G: Fn(f32) -> f32 + Send + Sync,
{
    #[inline]
    fn sample(&self, t: f32) -> f32 {
        self(t)
    }
}

/// The curve a [`crate::Tween`] follows.
#[derive(Clone)]
pub enum EasingFn {
    /// Catalog curve with default constants.
    Curve(Easing),
    /// Catalog curve with explicit Back/Elastic constants.
    Tuned { easing: Easing, params: CurveParams },
    /// Externally sampled curve.
    Sampled(Arc<dyn CurveSampler>),
}

impl EasingFn {
    /// Catalog curve with explicit constants, rejected if they fail
    /// [`CurveParams::validate`].
    pub fn tuned(easing: Easing, params: CurveParams) -> crate::Result<Self> {
        params.validate()?;
        Ok(Self::Tuned { easing, params })
    }

    pub fn sampled(sampler: impl CurveSampler + 'static) -> Self {
        Self::Sampled(Arc::new(sampler))
    }

    /// Progress factor at elapsed `t` of duration `d`.
    ///
    /// Sampled curves receive `t / d` in single precision and are not clamped.
    #[inline]
    pub fn factor<F: Time>(&self, t: F, d: F) -> F {
        match self {
            Self::Curve(easing) => easing.factor(t, d),
            Self::Tuned { easing, params } => easing.factor_with(t, d, params),
            Self::Sampled(sampler) => lit(f64::from(sampler.sample(to_f32(t / d)))),
        }
    }

    /// The catalog curve, if this is not a sampled one.
    pub fn easing(&self) -> Option<Easing> {
        match self {
            Self::Curve(easing) | Self::Tuned { easing, .. } => Some(*easing),
            Self::Sampled(_) => None,
        }
    }
}

impl Default for EasingFn {
    fn default() -> Self {
        Self::Curve(Easing::linear())
    }
}

impl fmt::Debug for EasingFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve(easing) => f.debug_tuple("Curve").field(easing).finish(),
            Self::Tuned { easing, params } => f
                .debug_struct("Tuned")
                .field("easing", easing)
                .field("params", params)
                .finish(),
            Self::Sampled(_) => f.write_str("Sampled(..)"),
        }
    }
}

impl From<Easing> for EasingFn {
    #[inline]
    fn from(easing: Easing) -> Self {
        Self::Curve(easing)
    }
}

impl From<Family> for EasingFn {
    #[inline]
    fn from(family: Family) -> Self {
        Self::Curve(family.into())
    }
}
