//! Tunable constants for the parameterized families (Back and Elastic).

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Back overshoot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackParams {
    /// How far the curve swings past its endpoints. `1.70158` gives a 10% overshoot.
    pub overshoot: f64,
}

impl BackParams {
    pub const DEFAULT: Self = Self {
        overshoot: 1.70158,
    };
}

impl Default for BackParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Elastic oscillation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticParams {
    /// Oscillation period as a fraction of the duration.
    pub period: f64,
    /// Peak swing as a ratio of the delta. Values at or below 1 are treated as 1.
    pub amplitude: f64,
}

impl ElasticParams {
    pub const DEFAULT: Self = Self {
        period: 0.3,
        amplitude: 1.0,
    };
}

impl Default for ElasticParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Constants consumed by [`crate::Easing::factor_with`].
///
/// Families other than Back and Elastic ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    pub back: BackParams,
    pub elastic: ElasticParams,
}

impl CurveParams {
    pub const DEFAULT: Self = Self {
        back: BackParams::DEFAULT,
        elastic: ElasticParams::DEFAULT,
    };

    pub fn with_overshoot(mut self, overshoot: f64) -> Self {
        self.back.overshoot = overshoot;
        self
    }

    pub fn with_elastic(mut self, period: f64, amplitude: f64) -> Self {
        self.elastic = ElasticParams { period, amplitude };
        self
    }

    /// Checks that every constant is usable.
    ///
    /// The default constants always pass. A zero or negative period would
    /// divide by zero inside the elastic shape.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.back.overshoot.is_finite() {
            return Err(EasingError::invalid_parameter(
                "back.overshoot",
                self.back.overshoot,
                "must be finite",
            ));
        }
        let period = self.elastic.period;
        if !(period.is_finite() && period > 0.0) {
            return Err(EasingError::invalid_parameter(
                "elastic.period",
                period,
                "must be > 0",
            ));
        }
        let amplitude = self.elastic.amplitude;
        if !(amplitude.is_finite() && amplitude >= 0.0) {
            return Err(EasingError::invalid_parameter(
                "elastic.amplitude",
                amplitude,
                "must be >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(CurveParams::default().validate().is_ok());
        assert_eq!(CurveParams::default(), CurveParams::DEFAULT);
    }

    #[test]
    fn bad_period_is_rejected() {
        let err = CurveParams::default()
            .with_elastic(0.0, 1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.category(), "validation");
        assert!(err.to_string().contains("elastic.period"));
    }

    #[test]
    fn non_finite_overshoot_is_rejected() {
        let err = CurveParams::default()
            .with_overshoot(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EasingError::InvalidParameter { ref name, .. } if name == "back.overshoot"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params: CurveParams = serde_json::from_str(r#"{"elastic":{"period":0.45}}"#).unwrap();
        assert_eq!(params.elastic.period, 0.45);
        assert_eq!(params.elastic.amplitude, 1.0);
        assert_eq!(params.back, BackParams::DEFAULT);
    }
}
