//! Transposition of notes between keys.

use super::Note;
use crate::error::ScaleError;
use crate::pitch::PitchClass;

/// Upward distance from one pitch class to another, 0-11.
pub fn interval_semitones(from: PitchClass, to: PitchClass) -> u8 {
    (to.index() as i32 - from.index() as i32).rem_euclid(12) as u8
}

impl Note {
    /// The note `semitones` higher (or lower, if negative), carrying into
    /// the next or previous octave. `None` if the octave would leave `u8`.
    pub fn transposed(&self, semitones: i32) -> Option<Note> {
        let absolute = self.octave as i32 * 12 + self.pitch_class.index() as i32 + semitones;
        let octave = u8::try_from(absolute.div_euclid(12)).ok()?;
        Some(Note::new(PitchClass::from_index(absolute), octave))
    }
}

/// Moves every note up by the interval from `from_key` to `to_key`.
///
/// Keys and notes are parsed strictly; the first bad value is returned as
/// an error and nothing is transposed.
///
/// # Examples
/// ```
/// use gigso_scale::note::transpose_notes;
///
/// let moved = transpose_notes("C", "D", &["C4", "E4", "B4"]).unwrap();
/// let names: Vec<String> = moved.iter().map(|n| n.to_string()).collect();
/// assert_eq!(names, ["D4", "F#4", "C#5"]);
/// ```
pub fn transpose_notes(from_key: &str, to_key: &str, notes: &[&str]) -> Result<Vec<Note>, ScaleError> {
    let from: PitchClass = from_key.parse()?;
    let to: PitchClass = to_key.parse()?;
    let semitones = interval_semitones(from, to) as i32;

    notes
        .iter()
        .map(|name| {
            let note: Note = name.parse()?;
            note.transposed(semitones)
                .ok_or_else(|| ScaleError::OctaveOutOfRange {
                    note: name.to_string(),
                    semitones,
                })
        })
        .collect()
}
