//! Freq command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use gigso_scale::try_note_frequency;
use serde::Serialize;
use std::process::ExitCode;

use super::print_json;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport {
    pub note: String,
    pub frequency_hz: f64,
}

/// Run the freq command
///
/// Unlike the library's lenient `note_frequency`, a malformed note is an error here.
pub fn run(note: &str, json_output: bool) -> Result<ExitCode> {
    let frequency_hz =
        try_note_frequency(note).with_context(|| format!("Cannot compute frequency of '{}'", note))?;
    let report = FrequencyReport {
        note: note.to_string(),
        frequency_hz,
    };

    if json_output {
        print_json(&report)?;
    } else {
        println!("{} {:.2} Hz", format!("{}:", report.note).cyan().bold(), frequency_hz);
    }

    Ok(ExitCode::SUCCESS)
}
