//! Vizij Easing Core (engine-agnostic)
//!
//! Penner-style easing equations `f(t, b, c, d)` for every curve family and
//! direction, generalized over scalar, integer, vector and quaternion values,
//! plus a [`Tween`] that advances a value along a curve once per host tick.
//!
//! Every formula is affine in its start value `b` and delta `c`: it reduces to
//! `b + c * k` where `k` is a progress factor that depends only on the curve,
//! the elapsed time and the duration. [`Easing::factor`] computes `k`; the
//! [`Lanes`] and [`Interpolate`] traits apply it to a concrete value type.

pub mod catalog;
pub mod config;
pub mod error;
pub mod facade;
pub mod interp;
pub mod math;
pub mod params;
pub mod sampler;
pub mod tween;

// Re-exports for consumers (adapters)
pub use catalog::{Easing, Family, Variant};
pub use config::Config;
pub use error::EasingError;
pub use facade::ease;
pub use interp::{ease_slerp, ease_slerp_direction, Interpolate, Lanes, Slerp};
pub use math::{Quat, Time, Vec2, Vec3, Vec4};
pub use params::{BackParams, CurveParams, ElasticParams};
pub use sampler::{CurveSampler, EasingFn};
pub use tween::{Tween, TweenState};

pub use catalog::functions::*;
pub use facade::functions::*;

/// Easing result type
pub type Result<T> = core::result::Result<T, EasingError>;
