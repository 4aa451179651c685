//! Tween configuration.

use serde::{Deserialize, Serialize};

/// Behaviour switches for [`crate::Tween`].
///
/// The default leaves both off: the formula sees the raw accumulated elapsed
/// time, so Back and Elastic keep extrapolating past the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clamp the time passed to the formula to `[0, duration]`. The stored
    /// elapsed time keeps accumulating either way.
    pub clamp_elapsed: bool,
    /// Write `to` exactly once the tween is complete.
    pub snap_on_complete: bool,
}

impl Config {
    /// Both switches on: the value never leaves the curve's defined range and
    /// lands exactly on `to`.
    pub fn clamped() -> Self {
        Self {
            clamp_elapsed: true,
            snap_on_complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unclamped() {
        let cfg = Config::default();
        assert!(!cfg.clamp_elapsed);
        assert!(!cfg.snap_on_complete);
    }

    #[test]
    fn json_round_trip() {
        let cfg = Config::clamped();
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"clamp_elapsed":true,"snap_on_complete":true}"#);
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
        let partial: Config = serde_json::from_str(r#"{"clamp_elapsed":true}"#).unwrap();
        assert!(!partial.snap_on_complete);
    }
}
