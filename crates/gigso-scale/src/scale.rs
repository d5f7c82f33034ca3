//! Scale types and their hand-pan interval patterns.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// Number of pads on the instrument, and so of offsets in every pattern.
pub const PAD_COUNT: usize = 8;

/// Semitone offsets from the root, one per pad, in scale-degree order.
///
/// The last offset is a major ninth (14) above the root, so it shares its
/// pitch class with the second degree.
pub type ScalePattern = [u8; PAD_COUNT];

/// Root, 2, 3, 4, 5, 6, 7, 9.
pub const MAJOR_PATTERN: ScalePattern = [0, 2, 4, 5, 7, 9, 11, 14];

/// Root, 2, b3, 4, 5, b6, b7, 9.
pub const MINOR_PATTERN: ScalePattern = [0, 2, 3, 5, 7, 8, 10, 14];

/// Scale types the engine has patterns for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    /// Natural major.
    Major,
    /// Natural minor.
    Minor,
}

/// Scale type substituted when the requested one is not recognised.
pub const DEFAULT_SCALE: ScaleType = ScaleType::Minor;

impl ScaleType {
    /// All scale types in declaration order.
    pub const ALL: [ScaleType; 2] = [ScaleType::Major, ScaleType::Minor];

    /// Returns the scale type as a string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
        }
    }

    /// Returns the pad pattern for this scale type.
    pub fn pattern(&self) -> ScalePattern {
        match self {
            ScaleType::Major => MAJOR_PATTERN,
            ScaleType::Minor => MINOR_PATTERN,
        }
    }

    /// Exact lookup of a scale identifier.
    pub fn lookup(name: &str) -> Option<ScaleType> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl FromStr for ScaleType {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ScaleError::UnknownScale {
            input: s.to_string(),
        })
    }
}

impl std::fmt::Display for ScaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns `true` iff the engine has a pattern for `scale`.
pub fn is_valid_scale(scale: &str) -> bool {
    ScaleType::lookup(scale).is_some()
}

/// Parse a scale type, substituting [`DEFAULT_SCALE`] when it is not recognised.
pub fn resolve_scale(scale: &str) -> ScaleType {
    match ScaleType::lookup(scale) {
        Some(s) => s,
        None => {
            tracing::warn!(
                target: "gigso_scale::fallback",
                input = scale,
                substitute = DEFAULT_SCALE.as_str(),
                "invalid scale, using default"
            );
            DEFAULT_SCALE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_shape() {
        for scale in ScaleType::ALL {
            let pattern = scale.pattern();
            assert_eq!(pattern.len(), PAD_COUNT);
            assert_eq!(pattern[0], 0);
            assert_eq!(pattern[7], 14);
            assert!(pattern.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(ScaleType::lookup("major"), Some(ScaleType::Major));
        assert_eq!(ScaleType::lookup("minor"), Some(ScaleType::Minor));
        assert_eq!(ScaleType::lookup("Major"), None);
        assert_eq!(ScaleType::lookup("pentatonic"), None);
    }

    #[test]
    fn test_resolve_scale_falls_back_to_minor() {
        assert_eq!(resolve_scale("major"), ScaleType::Major);
        assert_eq!(resolve_scale("bogus"), ScaleType::Minor);
        assert_eq!(resolve_scale("pentatonic"), ScaleType::Minor);
    }

    #[test]
    fn test_parse_error_carries_input() {
        let err = "lydian".parse::<ScaleType>().unwrap_err();
        assert_eq!(
            err,
            ScaleError::UnknownScale {
                input: "lydian".to_string()
            }
        );
        assert_eq!(err.code(), "unknown_scale");
    }
}
