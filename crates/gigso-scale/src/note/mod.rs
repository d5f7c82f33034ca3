//! Pitched notes and their frequencies.
//!
//! A [`Note`] is a pitch class plus an octave, written `{letter}{octave}`
//! (`"F#4"`). Frequencies use twelve-tone equal temperament with A4 = 440 Hz.

mod frequency;
mod parse;
mod transpose;


use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;

pub use frequency::{
    note_frequency, sort_by_frequency, try_note_frequency, A4_FREQUENCY, A4_OCTAVE,
};
pub use transpose::{interval_semitones, transpose_notes};

/// A pitch class at a given octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    pub pitch_class: PitchClass,
    pub octave: u8,
}

impl Note {
    /// Creates a note from a pitch class and octave.
    pub fn new(pitch_class: PitchClass, octave: u8) -> Self {
        Self {
            pitch_class,
            octave,
        }
    }

    /// Signed semitone distance from A4.
    pub fn semitones_from_a4(&self) -> i32 {
        (self.octave as i32 - A4_OCTAVE as i32) * 12 + self.pitch_class.index() as i32
            - PitchClass::A.index() as i32
    }

    /// Equal-tempered frequency in Hz.
    pub fn frequency(&self) -> f64 {
        A4_FREQUENCY * 2.0_f64.powf(self.semitones_from_a4() as f64 / 12.0)
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
