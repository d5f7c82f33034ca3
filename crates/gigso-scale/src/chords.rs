//! Diatonic triads and chord qualities.
//!
//! Each scale degree carries a triad built by stacking thirds within the
//! scale. The quality follows from the intervals above the root, and the
//! roman numeral from the degree and the quality.

use serde::Serialize;

use crate::pitch::{resolve_key, Key, PitchClass};
use crate::scale::{resolve_scale, ScaleType};

/// Number of distinct degrees in a seven-note scale.
pub const DEGREE_COUNT: usize = 7;

const NUMERALS: [&str; DEGREE_COUNT] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Quality of a three-note chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    /// Any stack that is not one of the four tertian triads.
    Unknown,
}

impl ChordQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a triad by the third and fifth above its root.
///
/// # Examples
/// ```
/// use gigso_scale::chords::{chord_quality, ChordQuality};
/// use gigso_scale::PitchClass;
///
/// let q = chord_quality(PitchClass::B, PitchClass::D, PitchClass::F);
/// assert_eq!(q, ChordQuality::Diminished);
/// ```
pub fn chord_quality(root: PitchClass, third: PitchClass, fifth: PitchClass) -> ChordQuality {
    let above = |pc: PitchClass| (pc.index() as i32 - root.index() as i32).rem_euclid(12);
    match (above(third), above(fifth)) {
        (4, 7) => ChordQuality::Major,
        (3, 7) => ChordQuality::Minor,
        (3, 6) => ChordQuality::Diminished,
        (4, 8) => ChordQuality::Augmented,
        _ => ChordQuality::Unknown,
    }
}

/// A triad on one degree of a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triad {
    /// Scale degree, 1-7.
    pub degree: u8,
    /// Root, third and fifth.
    pub notes: [PitchClass; 3],
    pub quality: ChordQuality,
    /// `I`, `ii`, `vii°`, `III+` and so on.
    pub numeral: String,
}

impl Triad {
    pub fn root(&self) -> PitchClass {
        self.notes[0]
    }

    /// Chord symbol using sharp spellings: `C`, `Dm`, `Bdim`, `Caug`.
    pub fn symbol(&self) -> String {
        let suffix = match self.quality {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Unknown => "?",
        };
        format!("{}{}", self.root(), suffix)
    }
}

/// Roman numeral for `degree` (1-7), cased by quality.
fn numeral(degree: usize, quality: ChordQuality) -> String {
    let upper = NUMERALS[degree - 1];
    match quality {
        ChordQuality::Major | ChordQuality::Unknown => upper.to_string(),
        ChordQuality::Minor => upper.to_lowercase(),
        ChordQuality::Diminished => format!("{}°", upper.to_lowercase()),
        ChordQuality::Augmented => format!("{}+", upper),
    }
}

/// The seven triads of `key` in `scale`, in degree order.
pub fn diatonic_triads(key: Key, scale: ScaleType) -> Vec<Triad> {
    let pattern = scale.pattern();
    let degree = |i: usize| key.transpose(pattern[i % DEGREE_COUNT] as i32);

    (0..DEGREE_COUNT)
        .map(|i| {
            let notes = [degree(i), degree(i + 2), degree(i + 4)];
            let quality = chord_quality(notes[0], notes[1], notes[2]);
            Triad {
                degree: i as u8 + 1,
                notes,
                quality,
                numeral: numeral(i + 1, quality),
            }
        })
        .collect()
}

/// Triads for a key/scale request, with the usual fallbacks for unknown
/// keys and scale types.
///
/// # Examples
/// ```
/// use gigso_scale::chord_suggestions;
///
/// let numerals: Vec<String> = chord_suggestions("C", "major")
///     .into_iter()
///     .map(|t| t.numeral)
///     .collect();
/// assert_eq!(numerals, ["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
/// ```
pub fn chord_suggestions(key: &str, scale: &str) -> Vec<Triad> {
    diatonic_triads(resolve_key(key), resolve_scale(scale))
}
