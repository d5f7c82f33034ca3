//! Equal-tempered frequency calculation.

use super::Note;
use crate::error::ScaleError;

/// Reference pitch for A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Octave number of the reference A.
pub const A4_OCTAVE: u8 = 4;

/// Frequency in Hz of a note written `{letter}{octave}`.
///
/// Uses `440 * 2^(semitones / 12)` where `semitones` is the signed distance
/// from A4. Input is not validated: a string that does not parse as a note
/// yields `NaN` instead of an error.
///
/// # Examples
/// ```
/// use gigso_scale::note_frequency;
///
/// assert_eq!(note_frequency("A4"), 440.0);
/// assert!((note_frequency("C4") - 261.63).abs() < 0.01);
/// assert!(note_frequency("H4").is_nan());
/// ```
pub fn note_frequency(note: &str) -> f64 {
    note.parse::<Note>()
        .map(|n| n.frequency())
        .unwrap_or(f64::NAN)
}

/// Like [`note_frequency`], but reports malformed input as an error.
pub fn try_note_frequency(note: &str) -> Result<f64, ScaleError> {
    Ok(note.parse::<Note>()?.frequency())
}

/// Returns the notes ordered by ascending pitch.
pub fn sort_by_frequency(notes: &[Note]) -> Vec<Note> {
    let mut sorted = notes.to_vec();
    sorted.sort_by_key(|n| n.semitones_from_a4());
    sorted
}
