//! Pitch classes and keys.
//!
//! The twelve equal-tempered pitch classes in chromatic order, spelled with
//! sharps only. A [`Key`] is a pitch class used as a scale root.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// Chromatic spellings, indexed by semitone above C.
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve pitch classes (C = 0 ... B = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

/// A scale root. Keys carry no octave.
pub type Key = PitchClass;

/// Key substituted when the requested key is not recognised.
pub const DEFAULT_KEY: Key = PitchClass::D;

impl PitchClass {
    /// All pitch classes in chromatic order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Semitones above C (0-11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for a semitone count, wrapping modulo 12.
    pub fn from_index(semitones: i32) -> PitchClass {
        Self::ALL[semitones.rem_euclid(12) as usize]
    }

    /// Sharp spelling of this pitch class.
    pub fn as_str(self) -> &'static str {
        CHROMATIC[self.index() as usize]
    }

    /// Pitch class `semitones` above (or below, if negative) this one.
    pub fn transpose(self, semitones: i32) -> PitchClass {
        Self::from_index(self.index() as i32 + semitones)
    }

    /// Returns `true` for the five sharp-spelled pitch classes.
    pub fn is_sharp(self) -> bool {
        self.as_str().len() == 2
    }

    /// Exact lookup of a sharp spelling. No trimming, no case folding, no flats.
    pub fn lookup(name: &str) -> Option<PitchClass> {
        CHROMATIC
            .iter()
            .position(|&spelling| spelling == name)
            .map(|idx| Self::ALL[idx])
    }
}

impl FromStr for PitchClass {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ScaleError::UnknownKey {
            input: s.to_string(),
        })
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns `true` iff `key` is exactly one of the twelve sharp spellings.
pub fn is_valid_key(key: &str) -> bool {
    PitchClass::lookup(key).is_some()
}

/// Parse a key, substituting [`DEFAULT_KEY`] when it is not recognised.
pub fn resolve_key(key: &str) -> Key {
    match PitchClass::lookup(key) {
        Some(pc) => pc,
        None => {
            tracing::warn!(
                target: "gigso_scale::fallback",
                input = key,
                substitute = DEFAULT_KEY.as_str(),
                "invalid key, using default"
            );
            DEFAULT_KEY
        }
    }
}
