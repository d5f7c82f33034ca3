//! Key signatures: accidentals, relative keys and circle-of-fifths position.

use serde::Serialize;

use crate::chords::DEGREE_COUNT;
use crate::layout::scale_degrees;
use crate::mapper::FLAT_TO_SHARP;
use crate::pitch::{Key, PitchClass};
use crate::scale::ScaleType;

/// Order in which sharps are added to a signature.
pub const SHARP_ORDER: [&str; 7] = ["F#", "C#", "G#", "D#", "A#", "E#", "B#"];

/// Order in which flats are added to a signature.
pub const FLAT_ORDER: [&str; 7] = ["Bb", "Eb", "Ab", "Db", "Gb", "Cb", "Fb"];

/// Circle-of-fifths position of each major key, indexed by pitch class.
///
/// Sharp-spelled roots take the side a musician would normally write them
/// on: C# major has seven sharps, but D#/G#/A# major are read as Eb/Ab/Bb.
const MAJOR_POSITIONS: [i8; 12] = [0, 7, 2, -3, 4, -1, 6, 1, -4, 3, -2, 5];

/// Semitones from a minor root up to its relative major.
const RELATIVE_INTERVAL: i32 = 3;

/// The key signature of a key and scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySignature {
    key: Key,
    scale: ScaleType,
}

impl KeySignature {
    pub fn new(key: Key, scale: ScaleType) -> Self {
        Self { key, scale }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn scale(&self) -> ScaleType {
        self.scale
    }

    /// Relative major root; a major key is its own relative major.
    pub fn relative_major(&self) -> Key {
        match self.scale {
            ScaleType::Major => self.key,
            ScaleType::Minor => self.key.transpose(RELATIVE_INTERVAL),
        }
    }

    /// Relative minor root; a minor key is its own relative minor.
    pub fn relative_minor(&self) -> Key {
        match self.scale {
            ScaleType::Major => self.key.transpose(-RELATIVE_INTERVAL),
            ScaleType::Minor => self.key,
        }
    }

    /// Position on the circle of fifths, -7 (seven flats) to 7 (seven sharps).
    pub fn circle_of_fifths_position(&self) -> i8 {
        MAJOR_POSITIONS[self.relative_major().index() as usize]
    }

    pub fn sharps(&self) -> Vec<&'static str> {
        let pos = self.circle_of_fifths_position();
        SHARP_ORDER[..pos.max(0) as usize].to_vec()
    }

    pub fn flats(&self) -> Vec<&'static str> {
        let pos = self.circle_of_fifths_position();
        FLAT_ORDER[..(-pos).max(0) as usize].to_vec()
    }

    /// Sharps followed by flats. At most one of the two is non-empty.
    pub fn accidentals(&self) -> Vec<&'static str> {
        let mut all = self.sharps();
        all.extend(self.flats());
        all
    }

    /// Root spelled the way the signature reads it (`A#` major is `Bb`).
    pub fn conventional_name(&self) -> &'static str {
        let name = self.key.as_str();
        if self.circle_of_fifths_position() < 0 && self.key.is_sharp() {
            return sharp_to_flat(name).unwrap_or(name);
        }
        name
    }

    /// The seven scale degrees from the root, flat-spelled in flat keys.
    pub fn notes_with_accidentals(&self) -> Vec<&'static str> {
        let flat_side = self.circle_of_fifths_position() < 0;
        self.degrees()
            .into_iter()
            .map(|pc| {
                let name = pc.as_str();
                if flat_side && pc.is_sharp() {
                    sharp_to_flat(name).unwrap_or(name)
                } else {
                    name
                }
            })
            .collect()
    }

    /// `true` if both signatures cover the same seven pitch classes, as a
    /// major key and its relative minor do.
    pub fn is_enharmonic_equivalent(&self, other: &KeySignature) -> bool {
        let mut ours = self.degrees();
        let mut theirs = other.degrees();
        ours.sort();
        theirs.sort();
        ours == theirs
    }

    fn degrees(&self) -> [PitchClass; DEGREE_COUNT] {
        let all = scale_degrees(self.key, self.scale);
        let mut degrees = [self.key; DEGREE_COUNT];
        degrees.copy_from_slice(&all[..DEGREE_COUNT]);
        degrees
    }

    /// `"{key} Major"` or `"{key} Minor"` using the sharp spelling.
    pub fn display_name(&self) -> String {
        let scale = match self.scale {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
        };
        format!("{} {}", self.key, scale)
    }

    /// Serializable summary of everything above.
    pub fn summary(&self) -> KeySignatureInfo {
        KeySignatureInfo {
            key: self.key,
            scale: self.scale,
            display_name: self.display_name(),
            conventional_name: self.conventional_name(),
            relative_major: self.relative_major(),
            relative_minor: self.relative_minor(),
            circle_of_fifths: self.circle_of_fifths_position(),
            sharps: self.sharps(),
            flats: self.flats(),
            notes: self.notes_with_accidentals(),
        }
    }
}

/// Flat spelling of a sharp pitch class name.
fn sharp_to_flat(sharp: &str) -> Option<&'static str> {
    FLAT_TO_SHARP
        .iter()
        .find(|(_, s)| *s == sharp)
        .map(|(flat, _)| *flat)
}

/// Key signature details for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeySignatureInfo {
    pub key: PitchClass,
    pub scale: ScaleType,
    pub display_name: String,
    pub conventional_name: &'static str,
    pub relative_major: PitchClass,
    pub relative_minor: PitchClass,
    pub circle_of_fifths: i8,
    pub sharps: Vec<&'static str>,
    pub flats: Vec<&'static str>,
    pub notes: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sig(key: &str, scale: ScaleType) -> KeySignature {
        KeySignature::new(key.parse().unwrap(), scale)
    }

    #[test]
    fn test_relative_keys() {
        assert_eq!(sig("A", ScaleType::Minor).relative_major(), PitchClass::C);
        assert_eq!(sig("C", ScaleType::Major).relative_minor(), PitchClass::A);
        assert_eq!(sig("A#", ScaleType::Minor).relative_major(), PitchClass::CSharp);
        assert_eq!(sig("E", ScaleType::Major).relative_minor(), PitchClass::CSharp);
        assert_eq!(sig("G", ScaleType::Major).relative_major(), PitchClass::G);
    }

    #[test]
    fn test_circle_of_fifths() {
        assert_eq!(sig("C", ScaleType::Major).circle_of_fifths_position(), 0);
        assert_eq!(sig("D", ScaleType::Major).circle_of_fifths_position(), 2);
        assert_eq!(sig("F", ScaleType::Major).circle_of_fifths_position(), -1);
        assert_eq!(sig("A#", ScaleType::Major).circle_of_fifths_position(), -2);
        // D minor shares F major's signature.
        assert_eq!(sig("D", ScaleType::Minor).circle_of_fifths_position(), -1);
        assert_eq!(sig("E", ScaleType::Minor).circle_of_fifths_position(), 1);
    }

    #[test]
    fn test_accidentals() {
        assert_eq!(sig("D", ScaleType::Major).sharps(), vec!["F#", "C#"]);
        assert!(sig("D", ScaleType::Major).flats().is_empty());
        assert_eq!(sig("D#", ScaleType::Major).flats(), vec!["Bb", "Eb", "Ab"]);
        assert!(sig("C", ScaleType::Major).accidentals().is_empty());
        assert_eq!(sig("C#", ScaleType::Major).sharps().len(), 7);
    }

    #[test]
    fn test_accidentals_match_generated_scale() {
        // Every sharp in the signature shows up in a sharp-keyed major scale.
        for key in ["G", "D", "A", "E", "B", "F#"] {
            let s = sig(key, ScaleType::Major);
            let degrees = crate::layout::scale_degrees(s.key(), ScaleType::Major);
            for sharp in s.sharps() {
                if sharp == "E#" || sharp == "B#" {
                    continue;
                }
                assert!(
                    degrees.iter().any(|pc| pc.as_str() == sharp),
                    "{} major should contain {}",
                    key,
                    sharp
                );
            }
        }
    }

    #[test]
    fn test_conventional_name() {
        assert_eq!(sig("A#", ScaleType::Major).conventional_name(), "Bb");
        assert_eq!(sig("G#", ScaleType::Major).conventional_name(), "Ab");
        assert_eq!(sig("C#", ScaleType::Major).conventional_name(), "C#");
        assert_eq!(sig("G#", ScaleType::Minor).conventional_name(), "G#");
        assert_eq!(sig("F", ScaleType::Major).conventional_name(), "F");
    }

    #[test]
    fn test_notes_with_accidentals() {
        assert_eq!(
            sig("C", ScaleType::Major).notes_with_accidentals(),
            vec!["C", "D", "E", "F", "G", "A", "B"]
        );
        assert_eq!(
            sig("A#", ScaleType::Major).notes_with_accidentals(),
            vec!["Bb", "C", "D", "Eb", "F", "G", "A"]
        );
        assert_eq!(
            sig("D", ScaleType::Minor).notes_with_accidentals(),
            vec!["D", "E", "F", "G", "A", "Bb", "C"]
        );
        assert_eq!(
            sig("E", ScaleType::Major).notes_with_accidentals(),
            vec!["E", "F#", "G#", "A", "B", "C#", "D#"]
        );
    }

    #[test]
    fn test_enharmonic_equivalence() {
        let c_major = sig("C", ScaleType::Major);
        assert!(c_major.is_enharmonic_equivalent(&sig("A", ScaleType::Minor)));
        assert!(c_major.is_enharmonic_equivalent(&c_major));
        assert!(!c_major.is_enharmonic_equivalent(&sig("G", ScaleType::Major)));
        assert!(!c_major.is_enharmonic_equivalent(&sig("C", ScaleType::Minor)));
        assert!(sig("F#", ScaleType::Minor).is_enharmonic_equivalent(&sig("A", ScaleType::Major)));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sig("F#", ScaleType::Minor).display_name(), "F# Minor");
        assert_eq!(sig("C", ScaleType::Major).display_name(), "C Major");
    }
}
