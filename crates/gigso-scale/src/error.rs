//! Error types for strict key, scale, and note parsing.

use thiserror::Error;

/// Errors returned by the strict parsers.
///
/// The lenient entry points (`generate_scale_notes`, `map_external_key`, ...)
/// never return these; they substitute defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("unknown key '{input}' (expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B)")]
    UnknownKey { input: String },
    #[error("unknown scale type '{input}' (expected 'major' or 'minor')")]
    UnknownScale { input: String },
    #[error("malformed note '{input}': {message}")]
    MalformedNote { input: String, message: String },
    #[error("transposing '{note}' by {semitones} semitones leaves the octave range")]
    OctaveOutOfRange { note: String, semitones: i32 },
}

impl ScaleError {
    /// Returns a stable short code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ScaleError::UnknownKey { .. } => "unknown_key",
            ScaleError::UnknownScale { .. } => "unknown_scale",
            ScaleError::MalformedNote { .. } => "malformed_note",
            ScaleError::OctaveOutOfRange { .. } => "octave_out_of_range",
        }
    }
}
