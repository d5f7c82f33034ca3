//! Chords command implementation

use anyhow::Result;
use colored::Colorize;
use gigso_scale::{chord_suggestions, ChordQuality, Triad};
use serde::Serialize;
use std::process::ExitCode;

use super::print_json;

/// JSON output of the chords command.
#[derive(Debug, Serialize)]
pub struct ChordsReport {
    pub key: String,
    pub scale: String,
    pub triads: Vec<Triad>,
}

pub fn build_report(key: &str, scale: &str) -> ChordsReport {
    ChordsReport {
        key: key.to_string(),
        scale: scale.to_string(),
        triads: chord_suggestions(key, scale),
    }
}

/// Run the chords command
pub fn run(key: &str, scale: &str, json_output: bool) -> Result<ExitCode> {
    let report = build_report(key, scale);

    if json_output {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", report.key.cyan().bold(), report.scale.cyan().bold());
    for triad in &report.triads {
        let numeral = format!("{:<5}", triad.numeral);
        let numeral = match triad.quality {
            ChordQuality::Major | ChordQuality::Augmented => numeral.bold(),
            _ => numeral.normal(),
        };
        let notes: Vec<&str> = triad.notes.iter().map(|pc| pc.as_str()).collect();
        println!(
            "  {} {:<5} {}",
            numeral,
            triad.symbol(),
            notes.join(" ").dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
