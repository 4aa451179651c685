//! Error types for the easing catalog

use serde::{Deserialize, Serialize};

/// Errors raised while resolving curves by name or validating tunable constants.
///
/// Evaluating a curve never fails: invalid inputs such as a zero duration
/// propagate NaN/Infinity through the arithmetic instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Curve family name not recognised
    #[error("Unknown easing family: {name}")]
    UnknownFamily { name: String },

    /// Direction suffix not recognised
    #[error("Unknown easing variant '{name}' (expected in, out, in_out or out_in)")]
    UnknownVariant { name: String },

    /// Tunable constant out of range
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },
}

impl EasingError {
    pub(crate) fn invalid_parameter(name: &str, value: f64, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownFamily { .. } | Self::UnknownVariant { .. } => "lookup",
            Self::InvalidParameter { .. } => "validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let lookup = EasingError::UnknownFamily {
            name: "wobble".to_string(),
        };
        assert_eq!(lookup.category(), "lookup");

        let validation = EasingError::invalid_parameter("elastic.period", 0.0, "must be > 0");
        assert_eq!(validation.category(), "validation");
        assert_eq!(
            validation.to_string(),
            "Invalid parameter elastic.period = 0: must be > 0"
        );
    }

    #[test]
    fn test_serialization() {
        let error = EasingError::UnknownVariant {
            name: "sideways".to_string(),
        };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: EasingError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
