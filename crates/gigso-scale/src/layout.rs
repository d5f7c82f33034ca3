//! Hand-pan pad layouts.
//!
//! A layout places the eight notes of a scale onto the instrument's pads.
//! Scale degrees alternate between two octaves: the root, 3rd, 5th and 7th
//! sit in octave 4, the 2nd, 4th, 6th and 9th in octave 3. Pads are listed
//! octave-4 notes first:
//!
//! ```text
//! [root4, 3rd4, 5th4, 7th4, 2nd3, 4th3, 6th3, 9th3]
//! ```
//!
//! This order is neither scale-degree nor pitch order. Use
//! [`HandPanLayout::by_pitch`] for ascending pitch.

use serde::Serialize;

use crate::note::{sort_by_frequency, Note};
use crate::pitch::{resolve_key, PitchClass};
use crate::scale::{resolve_scale, ScaleType, PAD_COUNT};

/// Octave of the even scale degrees (root, 3rd, 5th, 7th).
pub const UPPER_OCTAVE: u8 = 4;

/// Octave of the odd scale degrees (2nd, 4th, 6th, 9th).
pub const LOWER_OCTAVE: u8 = 3;

/// Eight notes in pad order.
///
/// Serialize-only: a layout is always generated from a key and scale type,
/// never read back from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HandPanLayout {
    notes: [Note; PAD_COUNT],
}

impl HandPanLayout {
    /// Builds the layout for a root and scale type.
    pub fn new(key: PitchClass, scale: ScaleType) -> Self {
        let degrees = scale_degrees(key, scale);

        let mut notes = [Note::new(key, UPPER_OCTAVE); PAD_COUNT];
        let half = PAD_COUNT / 2;
        for (pos, pitch_class) in degrees.into_iter().enumerate() {
            let (pad, octave) = if pos % 2 == 0 {
                (pos / 2, UPPER_OCTAVE)
            } else {
                (half + pos / 2, LOWER_OCTAVE)
            };
            notes[pad] = Note::new(pitch_class, octave);
        }

        Self { notes }
    }

    /// Notes in pad order.
    pub fn notes(&self) -> &[Note; PAD_COUNT] {
        &self.notes
    }

    /// Note on pad `index`, if the index is in range.
    pub fn pad(&self, index: usize) -> Option<Note> {
        self.notes.get(index).copied()
    }

    /// Notes ordered by ascending pitch.
    pub fn by_pitch(&self) -> Vec<Note> {
        sort_by_frequency(&self.notes)
    }

    /// Textual note names in pad order.
    pub fn to_strings(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.to_string()).collect()
    }

    /// Number of pads, always 8.
    pub fn len(&self) -> usize {
        PAD_COUNT
    }

    /// Always `false`; a layout has a note on every pad.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the notes in pad order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }
}

impl<'a> IntoIterator for &'a HandPanLayout {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

/// Pitch classes of the scale in degree order: root, 2, 3, 4, 5, 6, 7, 9.
pub fn scale_degrees(key: PitchClass, scale: ScaleType) -> [PitchClass; PAD_COUNT] {
    scale.pattern().map(|offset| key.transpose(offset as i32))
}

/// Layout for a key and scale type given as strings.
///
/// Never fails: an unknown key becomes `D`, an unknown scale type becomes
/// `minor`. Each substitution is reported as a `tracing` warning.
///
/// # Examples
/// ```
/// use gigso_scale::generate_scale_notes;
///
/// let layout = generate_scale_notes("C", "major");
/// assert_eq!(
///     layout.to_strings(),
///     ["C4", "E4", "G4", "B4", "D3", "F3", "A3", "D3"]
/// );
/// ```
pub fn generate_scale_notes(key: &str, scale: &str) -> HandPanLayout {
    HandPanLayout::new(resolve_key(key), resolve_scale(scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letters(key: PitchClass, scale: ScaleType) -> Vec<&'static str> {
        scale_degrees(key, scale).iter().map(|pc| pc.as_str()).collect()
    }

    #[test]
    fn test_scale_degrees_concrete() {
        assert_eq!(
            letters(PitchClass::C, ScaleType::Major),
            ["C", "D", "E", "F", "G", "A", "B", "D"]
        );
        assert_eq!(
            letters(PitchClass::D, ScaleType::Major),
            ["D", "E", "F#", "G", "A", "B", "C#", "E"]
        );
        assert_eq!(
            letters(PitchClass::F, ScaleType::Major),
            ["F", "G", "A", "A#", "C", "D", "E", "G"]
        );
        assert_eq!(
            letters(PitchClass::C, ScaleType::Minor),
            ["C", "D", "D#", "F", "G", "G#", "A#", "D"]
        );
    }

    #[test]
    fn test_layout_interleave() {
        let layout = HandPanLayout::new(PitchClass::D, ScaleType::Minor);
        assert_eq!(
            layout.to_strings(),
            ["D4", "F4", "A4", "C4", "E3", "G3", "A#3", "E3"]
        );
    }

    #[test]
    fn test_octave_assignment() {
        let layout = HandPanLayout::new(PitchClass::G, ScaleType::Major);
        for (pad, note) in layout.iter().enumerate() {
            let expected = if pad < 4 { UPPER_OCTAVE } else { LOWER_OCTAVE };
            assert_eq!(note.octave, expected, "pad {}", pad);
        }
    }

    #[test]
    fn test_by_pitch_is_ascending() {
        let layout = HandPanLayout::new(PitchClass::C, ScaleType::Major);
        let sorted = layout.by_pitch();
        assert_eq!(sorted.len(), 8);
        assert!(sorted.windows(2).all(|w| w[0].frequency() <= w[1].frequency()));
        assert_eq!(sorted[0].to_string(), "D3");
    }

    #[test]
    fn test_pad_lookup() {
        let layout = HandPanLayout::new(PitchClass::C, ScaleType::Major);
        assert_eq!(layout.pad(0).map(|n| n.to_string()), Some("C4".to_string()));
        assert_eq!(layout.pad(7).map(|n| n.to_string()), Some("D3".to_string()));
        assert_eq!(layout.pad(8), None);
    }

    #[test]
    fn test_generate_with_fallbacks() {
        assert_eq!(
            generate_scale_notes("H", "major"),
            generate_scale_notes("D", "major")
        );
        assert_eq!(
            generate_scale_notes("C", "bogus"),
            generate_scale_notes("C", "minor")
        );
        assert_eq!(generate_scale_notes("H", "major").notes()[0].to_string(), "D4");
        assert_eq!(generate_scale_notes("C", "bogus").notes()[0].to_string(), "C4");
    }

    #[test]
    fn test_serializes_as_note_array() {
        let layout = HandPanLayout::new(PitchClass::A, ScaleType::Minor);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(
            json,
            r#"["A4","C4","E4","G4","B3","D3","F3","B3"]"#
        );
    }
}
