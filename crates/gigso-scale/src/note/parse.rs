//! Note name parsing.

use std::str::FromStr;

use super::Note;
use crate::error::ScaleError;
use crate::pitch::PitchClass;

impl FromStr for Note {
    type Err = ScaleError;

    /// Parse `{letter}{octave}` where the letter is a sharp spelling
    /// (`C`, `C#`, ... `B`) and the octave is one or more ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |message: &str| ScaleError::MalformedNote {
            input: s.to_string(),
            message: message.to_string(),
        };

        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| malformed("missing octave"))?;
        let (letter, octave) = s.split_at(split);

        if letter.is_empty() {
            return Err(malformed("missing pitch letter"));
        }
        let pitch_class = PitchClass::lookup(letter)
            .ok_or_else(|| malformed(&format!("unknown pitch letter '{}'", letter)))?;

        if !octave.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("octave must be a non-negative integer"));
        }
        let octave: u8 = octave
            .parse()
            .map_err(|_| malformed("octave out of range"))?;

        Ok(Note::new(pitch_class, octave))
    }
}

impl TryFrom<String> for Note {
    type Error = ScaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
