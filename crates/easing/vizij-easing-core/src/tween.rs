//! Tween: a value advanced along an easing curve by a host tick loop.

use log::{debug, trace, warn};

use crate::config::Config;
use crate::interp::Interpolate;
use crate::math::Time;
use crate::sampler::EasingFn;

/// Derived progression state. Never stored; recomputed from elapsed and duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenState {
    /// Nothing has elapsed yet (or elapsed went negative).
    Idle,
    /// `0 < elapsed < duration`.
    Running,
    /// `elapsed >= duration`, or the duration is not positive.
    Complete,
}

/// A value moving from `from` to `to` over `duration` along a curve.
///
/// A plain mutable value: the owner calls [`Tween::advance`] once per tick from
/// a single thread. There is no reset; construct a new tween to restart.
#[derive(Clone, Debug)]
pub struct Tween<T, F = f32> {
    easing: EasingFn,
    from: T,
    to: T,
    value: T,
    elapsed: F,
    duration: F,
    config: Config,
}

impl<T, F> Tween<T, F>
where
    T: Interpolate<F>,
    F: Time,
{
    /// Starts at `from` with nothing elapsed. The duration is not validated.
    pub fn new(easing: impl Into<EasingFn>, from: T, to: T, duration: F) -> Self {
        if !(duration > F::zero() && duration.is_finite()) {
            warn!(
                "tween built with duration {:?}; it completes immediately and jumps to its end value",
                duration
            );
        }
        Self {
            easing: easing.into(),
            value: from.clone(),
            from,
            to,
            elapsed: F::zero(),
            duration,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Adds `dt` to the elapsed time and recomputes the value.
    ///
    /// Negative `dt` moves backwards. Without [`Config::clamp_elapsed`] the curve
    /// is evaluated at the raw elapsed time, so advancing past the end
    /// extrapolates.
    pub fn advance(&mut self, dt: F) -> &T {
        let was_complete = self.is_complete();
        self.elapsed = self.elapsed + dt;
        self.value = self.sample();
        trace!(
            "tween advance dt={:?} elapsed={:?}/{:?}",
            dt,
            self.elapsed,
            self.duration
        );
        if !was_complete && self.is_complete() {
            debug!(
                "tween complete after {:?} (duration {:?})",
                self.elapsed, self.duration
            );
        }
        &self.value
    }

    fn sample(&self) -> T {
        if !self.has_duration() {
            return self.to.clone();
        }
        if self.config.snap_on_complete && self.is_complete() {
            return self.to.clone();
        }
        let t = if self.config.clamp_elapsed {
            self.elapsed.max(F::zero()).min(self.duration)
        } else {
            self.elapsed
        };
        let k = self.easing.factor(t, self.duration);
        T::interpolate(&self.from, &self.to, k)
    }

    #[inline]
    fn has_duration(&self) -> bool {
        self.duration > F::zero()
    }

    pub fn state(&self) -> TweenState {
        if !self.has_duration() || self.elapsed >= self.duration {
            TweenState::Complete
        } else if self.elapsed <= F::zero() {
            TweenState::Idle
        } else {
            TweenState::Running
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state() == TweenState::Complete
    }

    /// `elapsed / duration` clamped to `[0, 1]`; 1 for a non-positive duration.
    pub fn progress(&self) -> F {
        if !self.has_duration() {
            return F::one();
        }
        (self.elapsed / self.duration).max(F::zero()).min(F::one())
    }

    /// Time left until completion, never negative.
    pub fn remaining(&self) -> F {
        (self.duration - self.elapsed).max(F::zero())
    }
}

impl<T, F: Copy> Tween<T, F> {
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn from(&self) -> &T {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &T {
        &self.to
    }

    #[inline]
    pub fn elapsed(&self) -> F {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> F {
        self.duration
    }

    #[inline]
    pub fn easing(&self) -> &EasingFn {
        &self.easing
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Easing, Family, Quat, Variant, Vec3};
    use approx::assert_relative_eq;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn linear_tween_reaches_end() {
        init_logs();
        let mut tween: Tween<f32, f32> = Tween::new(Easing::linear(), 0.0, 10.0, 2.0);
        assert_eq!(tween.state(), TweenState::Idle);
        assert_eq!(*tween.value(), 0.0);

        assert_eq!(*tween.advance(1.0), 5.0);
        assert_eq!(tween.state(), TweenState::Running);
        assert!(!tween.is_complete());

        assert_eq!(*tween.advance(1.0), 10.0);
        assert!(tween.is_complete());
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(tween.remaining(), 0.0);
    }

    #[test]
    fn overshoot_without_clamp_extrapolates() {
        let mut tween: Tween<f64, f64> = Tween::new(Family::Linear, 0.0, 10.0, 1.0);
        tween.advance(1.5);
        assert_eq!(*tween.value(), 15.0);
        assert!(tween.is_complete());
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn clamp_holds_the_end_value() {
        let back = Easing::new(Family::Back, Variant::Out);
        let mut tween: Tween<f64, f64> =
            Tween::new(back, 0.0, 1.0, 1.0).with_config(Config {
                clamp_elapsed: true,
                snap_on_complete: false,
            });
        tween.advance(3.0);
        assert_relative_eq!(*tween.value(), 1.0, epsilon = 1e-12);
        // Elapsed still accumulates.
        assert_eq!(tween.elapsed(), 3.0);
    }

    #[test]
    fn snap_writes_exact_end_value() {
        let elastic = Easing::new(Family::Elastic, Variant::Out);
        let mut tween: Tween<f32, f32> =
            Tween::new(elastic, 0.0, 3.0, 0.3).with_config(Config::clamped());
        for _ in 0..10 {
            tween.advance(1.0 / 30.0);
        }
        assert!(tween.is_complete());
        assert_eq!(*tween.value(), 3.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        init_logs();
        let mut tween: Tween<f32, f32> = Tween::new(Family::Quad, 2.0, 4.0, 0.0);
        assert!(tween.is_complete());
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(*tween.advance(0.0), 4.0);
        assert!(tween.value().is_finite());
    }

    #[test]
    fn negative_dt_moves_backwards() {
        let mut tween: Tween<f64, f64> = Tween::new(Easing::linear(), 0.0, 10.0, 2.0);
        tween.advance(1.0);
        tween.advance(-1.5);
        assert_eq!(tween.state(), TweenState::Idle);
        assert_eq!(*tween.value(), -2.5);
        assert_eq!(tween.progress(), 0.0);
        assert_eq!(tween.remaining(), 2.5);
    }

    #[test]
    fn integer_tween_reaches_end_of_wide_range() {
        let mut tween: Tween<i8, f32> = Tween::new(Easing::linear(), -100, 100, 1.0);
        assert_eq!(*tween.advance(0.5), 0);
        assert_eq!(*tween.advance(0.5), 100);
        assert!(tween.is_complete());
    }

    #[test]
    fn vector_tween_is_lane_wise() {
        let quad = Easing::new(Family::Quad, Variant::Out);
        let mut tween: Tween<Vec3<f32>, f32> = Tween::new(
            quad,
            Vec3::new(0.0, 10.0, -4.0),
            Vec3::new(10.0, 10.0, 4.0),
            1.0,
        );
        let v = *tween.advance(0.5);
        assert_eq!(v, Vec3::new(7.5, 10.0, 2.0));
    }

    #[test]
    fn rotation_tween_stays_unit() {
        let back = Easing::new(Family::Back, Variant::InOut);
        let to = Quat::from_axis_angle(Vec3::new(0.0f32, 0.0, 1.0), 2.0);
        let mut tween: Tween<Quat<f32>, f32> = Tween::new(back, Quat::identity(), to, 1.0);
        for _ in 0..15 {
            let q = *tween.advance(0.1);
            assert_relative_eq!(q.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn sampled_curve_drives_tween() {
        let step = EasingFn::sampled(|t: f32| if t < 0.5 { 0.0 } else { 1.0 });
        let mut tween: Tween<f32, f32> = Tween::new(step, 0.0, 8.0, 1.0);
        assert_eq!(*tween.advance(0.25), 0.0);
        assert_eq!(*tween.advance(0.5), 8.0);
        assert!(tween.easing().easing().is_none());
    }
}
