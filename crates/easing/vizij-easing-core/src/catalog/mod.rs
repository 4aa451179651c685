//! Equation catalog: curve families, directional variants and their dispatch.
//!
//! Each family defines a canonical In and Out shape ([`equations`]); the
//! InOut/OutIn variants are derived from those two by [`compose`].

pub mod compose;
pub mod equations;
pub mod functions;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;
use crate::interp::Lanes;
use crate::math::Time;
use crate::params::CurveParams;

/// Curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Elastic,
    Bounce,
    Back,
}

impl Family {
    pub const ALL: [Family; 11] = [
        Family::Linear,
        Family::Quad,
        Family::Cubic,
        Family::Quart,
        Family::Quint,
        Family::Sine,
        Family::Expo,
        Family::Circ,
        Family::Elastic,
        Family::Bounce,
        Family::Back,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quad => "quad",
            Self::Cubic => "cubic",
            Self::Quart => "quart",
            Self::Quint => "quint",
            Self::Sine => "sine",
            Self::Expo => "expo",
            Self::Circ => "circ",
            Self::Elastic => "elastic",
            Self::Bounce => "bounce",
            Self::Back => "back",
        }
    }

    /// Whether the variant changes the curve (false only for Linear).
    #[inline]
    pub fn has_variants(&self) -> bool {
        !matches!(self, Self::Linear)
    }
}

impl FromStr for Family {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Family::ALL
            .into_iter()
            .find(|f| f.name() == lowered)
            .ok_or(EasingError::UnknownFamily {
                name: s.to_string(),
            })
    }
}

/// Direction of a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Decelerating toward the end value.
    #[default]
    Out,
    /// Accelerating away from the start value.
    In,
    /// In over the first half, Out over the second.
    InOut,
    /// Out over the first half, In over the second.
    OutIn,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Out, Variant::In, Variant::InOut, Variant::OutIn];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::In => "in",
            Self::InOut => "in_out",
            Self::OutIn => "out_in",
        }
    }
}

impl FromStr for Variant {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase().replace('-', "_");
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == lowered)
            .ok_or(EasingError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

/// A resolved easing curve: the `(Family, Variant)` pair.
///
/// Stateless and `Copy`; evaluation is a pure function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Easing {
    pub family: Family,
    #[serde(default)]
    pub variant: Variant,
}

impl Default for Easing {
    fn default() -> Self {
        Self::linear()
    }
}

impl Easing {
    /// Every distinct curve: Linear, then each other family in all four variants.
    pub const ALL: [Easing; 41] = {
        let mut all = [Easing::linear(); 41];
        let mut i = 1;
        while i < Family::ALL.len() {
            let mut j = 0;
            while j < Variant::ALL.len() {
                all[1 + (i - 1) * 4 + j] = Easing::new(Family::ALL[i], Variant::ALL[j]);
                j += 1;
            }
            i += 1;
        }
        all
    };

    /// Linear has a single shape, so its variant is always stored as Out.
    #[inline]
    pub const fn new(family: Family, variant: Variant) -> Self {
        let variant = match family {
            Family::Linear => Variant::Out,
            _ => variant,
        };
        Self { family, variant }
    }

    #[inline]
    pub const fn linear() -> Self {
        Self::new(Family::Linear, Variant::Out)
    }

    /// Canonical snake_case name, e.g. `quad_in_out`. Linear has no suffix.
    pub fn name(&self) -> String {
        if self.family.has_variants() {
            format!("{}_{}", self.family.name(), self.variant.name())
        } else {
            self.family.name().to_string()
        }
    }

    /// Progress factor `k` at elapsed `t` of duration `d`, with default constants.
    ///
    /// `k` is 0 at `t = 0` and 1 at `t = d`; Back and Elastic leave `[0, 1]`
    /// in between. `d = 0` is not guarded and yields NaN or infinity.
    #[inline]
    pub fn factor<F: Time>(&self, t: F, d: F) -> F {
        self.factor_with(t, d, &CurveParams::default())
    }

    /// Progress factor using explicit tunable constants.
    pub fn factor_with<F: Time>(&self, t: F, d: F, params: &CurveParams) -> F {
        if !self.family.has_variants() {
            return equations::linear(t, d, params);
        }

        let (ease_in, ease_out) = equations::shapes::<F>(self.family);
        match self.variant {
            Variant::In => ease_in(t, d, params),
            Variant::Out => ease_out(t, d, params),
            Variant::InOut => compose::in_out(ease_in, ease_out, t, d, params),
            Variant::OutIn => compose::out_in(ease_out, ease_in, t, d, params),
        }
    }

    /// Evaluates `f(t, b, c, d)`: start value `b`, delta `c`, duration `d`.
    #[inline]
    pub fn ease<T, F>(&self, t: F, b: T, c: T, d: F) -> T
    where
        F: Time,
        T: Lanes<F>,
    {
        T::offset(b, c, self.factor(t, d))
    }

    /// [`Easing::ease`] with explicit tunable constants.
    #[inline]
    pub fn ease_with<T, F>(&self, t: F, b: T, c: T, d: F, params: &CurveParams) -> T
    where
        F: Time,
        T: Lanes<F>,
    {
        T::offset(b, c, self.factor_with(t, d, params))
    }
}

impl From<Family> for Easing {
    /// The family's canonical Out curve.
    #[inline]
    fn from(family: Family) -> Self {
        Self::new(family, Variant::Out)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Easing {
    type Err = EasingError;

    /// Parses `linear`, `quad_out`, `back_in_out`, `elastic-out-in`, ... A bare
    /// family name selects its Out variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let (family, rest) = match normalized.split_once('_') {
            Some((family, rest)) => (family, Some(rest)),
            None => (normalized.as_str(), None),
        };
        let family: Family = family.parse().map_err(|_| EasingError::UnknownFamily {
            name: s.to_string(),
        })?;
        let variant = match rest {
            Some(rest) => rest.parse::<Variant>()?,
            None => Variant::Out,
        };
        Ok(Self::new(family, variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_is_unique_and_complete() {
        let names: HashSet<String> = Easing::ALL.iter().map(Easing::name).collect();
        assert_eq!(names.len(), 41);
        assert!(names.contains("linear"));
        assert!(names.contains("bounce_out_in"));
        assert_eq!(Easing::ALL[1], Easing::new(Family::Quad, Variant::Out));
        assert_eq!(Easing::ALL[40], Easing::new(Family::Back, Variant::OutIn));
    }

    #[test]
    fn names_round_trip() {
        for easing in Easing::ALL {
            let parsed: Easing = easing.to_string().parse().unwrap();
            assert_eq!(parsed, easing);
        }
    }

    #[test]
    fn parse_is_lenient_on_case_and_dashes() {
        assert_eq!(
            "Elastic-Out-In".parse::<Easing>().unwrap(),
            Easing::new(Family::Elastic, Variant::OutIn)
        );
        assert_eq!(
            "cubic".parse::<Easing>().unwrap(),
            Easing::new(Family::Cubic, Variant::Out)
        );
    }

    #[test]
    fn parse_errors_name_the_bad_part() {
        assert!(matches!(
            "wobble_in".parse::<Easing>(),
            Err(EasingError::UnknownFamily { .. })
        ));
        assert!(matches!(
            "quad_sideways".parse::<Easing>(),
            Err(EasingError::UnknownVariant { .. })
        ));
    }

    #[test]
    fn linear_variants_collapse_to_one_curve() {
        let parsed: Easing = "linear_in".parse().unwrap();
        assert_eq!(parsed, Easing::linear());
        assert_eq!(parsed.to_string().parse::<Easing>().unwrap(), parsed);
        assert_eq!(Easing::new(Family::Linear, Variant::OutIn), Easing::linear());
    }

    #[test]
    fn linear_ignores_variant() {
        for variant in Variant::ALL {
            let e = Easing::new(Family::Linear, variant);
            assert_eq!(e.factor(0.3f64, 1.0), 0.3);
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let e = Easing::new(Family::Bounce, Variant::InOut);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"family":"bounce","variant":"in_out"}"#);
        let back: Easing = serde_json::from_str(r#"{"family":"sine"}"#).unwrap();
        assert_eq!(back, Easing::new(Family::Sine, Variant::Out));
    }
}
