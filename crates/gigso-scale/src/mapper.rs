//! Mapping of external song keys and scales onto the instrument vocabulary.
//!
//! Songs and chord palettes name keys with flats (`Bb`) and scales with
//! church modes (`dorian`). The instrument only understands sharp keys and
//! a three-word scale vocabulary, so everything is folded onto those with a
//! fixed table and a default when nothing matches.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::pitch::{is_valid_key, PitchClass, DEFAULT_KEY};
use crate::scale::ScaleType;

/// Flat spellings and their sharp equivalents.
pub const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Mode names folded onto the instrument vocabulary.
pub const MODE_TO_SCALE: [(&str, InstrumentScale); 9] = [
    ("ionian", InstrumentScale::Major),
    ("dorian", InstrumentScale::Minor),
    ("phrygian", InstrumentScale::Minor),
    ("lydian", InstrumentScale::Major),
    ("mixolydian", InstrumentScale::Major),
    ("aeolian", InstrumentScale::Minor),
    ("locrian", InstrumentScale::Minor),
    ("pentatonic-major", InstrumentScale::Pentatonic),
    ("pentatonic-minor", InstrumentScale::Pentatonic),
];

/// Scale vocabulary accepted by the instrument.
///
/// Wider than [`ScaleType`]: `Pentatonic` is accepted and passed around, but
/// there is no pentatonic pad pattern, so it plays as minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentScale {
    Major,
    Minor,
    Pentatonic,
}

/// Scale used when an external scale has no mapping.
pub const DEFAULT_INSTRUMENT_SCALE: InstrumentScale = InstrumentScale::Minor;

impl InstrumentScale {
    pub const ALL: [InstrumentScale; 3] = [
        InstrumentScale::Major,
        InstrumentScale::Minor,
        InstrumentScale::Pentatonic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentScale::Major => "major",
            InstrumentScale::Minor => "minor",
            InstrumentScale::Pentatonic => "pentatonic",
        }
    }

    pub fn lookup(name: &str) -> Option<InstrumentScale> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Scale type whose pattern the engine will use for this scale.
    pub fn engine_scale(&self) -> ScaleType {
        match self {
            InstrumentScale::Major => ScaleType::Major,
            InstrumentScale::Minor => ScaleType::Minor,
            InstrumentScale::Pentatonic => {
                tracing::debug!(
                    target: "gigso_scale::fallback",
                    input = self.as_str(),
                    substitute = ScaleType::Minor.as_str(),
                    "no pentatonic pad pattern, playing as minor"
                );
                ScaleType::Minor
            }
        }
    }
}

impl From<ScaleType> for InstrumentScale {
    fn from(scale: ScaleType) -> Self {
        match scale {
            ScaleType::Major => InstrumentScale::Major,
            ScaleType::Minor => InstrumentScale::Minor,
        }
    }
}

impl FromStr for InstrumentScale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ScaleError::UnknownScale {
            input: s.to_string(),
        })
    }
}

impl std::fmt::Display for InstrumentScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns `true` if the instrument accepts `scale` as-is.
pub fn is_instrument_scale(scale: &str) -> bool {
    InstrumentScale::lookup(scale).is_some()
}

/// Maps an external key onto an engine key.
///
/// Sharp keys pass through, the five common flats become their sharp
/// spelling, anything else becomes `D`.
///
/// # Examples
/// ```
/// use gigso_scale::{map_external_key, PitchClass};
///
/// assert_eq!(map_external_key("G"), PitchClass::G);
/// assert_eq!(map_external_key("Bb"), PitchClass::ASharp);
/// assert_eq!(map_external_key("Z"), PitchClass::D);
/// ```
pub fn map_external_key(external: &str) -> PitchClass {
    if let Some(pc) = PitchClass::lookup(external) {
        return pc;
    }

    let mapped = FLAT_TO_SHARP
        .iter()
        .find(|(flat, _)| *flat == external)
        .map(|(_, sharp)| *sharp)
        .filter(|sharp| is_valid_key(sharp))
        .and_then(PitchClass::lookup);

    match mapped {
        Some(pc) => pc,
        None => {
            tracing::warn!(
                target: "gigso_scale::fallback",
                input = external,
                substitute = DEFAULT_KEY.as_str(),
                "no mapping for song key, using default"
            );
            DEFAULT_KEY
        }
    }
}

/// Maps an external scale or mode name onto the instrument vocabulary.
///
/// `major`, `minor` and `pentatonic` pass through; modes fold onto major or
/// minor; anything else becomes `minor`.
pub fn map_external_scale(external: &str) -> InstrumentScale {
    if let Some(scale) = InstrumentScale::lookup(external) {
        return scale;
    }

    let mapped = MODE_TO_SCALE
        .iter()
        .find(|(mode, _)| *mode == external)
        .map(|(_, scale)| *scale);

    match mapped {
        Some(scale) => scale,
        None => {
            tracing::warn!(
                target: "gigso_scale::fallback",
                input = external,
                substitute = DEFAULT_INSTRUMENT_SCALE.as_str(),
                "no mapping for song scale, using default"
            );
            DEFAULT_INSTRUMENT_SCALE
        }
    }
}
