//! Map command implementation
//!
//! Shows how a song's key and scale land on the instrument.

use anyhow::Result;
use colored::Colorize;
use gigso_scale::{map_external_key, map_external_scale, HandPanLayout, InstrumentScale, Key};
use serde::Serialize;
use std::process::ExitCode;

use super::print_json;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapReport {
    pub song_key: String,
    pub song_scale: String,
    pub key: Key,
    pub scale: InstrumentScale,
    /// Scale type whose pattern is actually played.
    pub plays_as: String,
    pub notes: HandPanLayout,
}

pub fn build_report(song_key: &str, song_scale: &str) -> MapReport {
    let key = map_external_key(song_key);
    let scale = map_external_scale(song_scale);
    let engine_scale = scale.engine_scale();
    MapReport {
        song_key: song_key.to_string(),
        song_scale: song_scale.to_string(),
        key,
        scale,
        plays_as: engine_scale.to_string(),
        notes: HandPanLayout::new(key, engine_scale),
    }
}

/// Run the map command
pub fn run(song_key: &str, song_scale: &str, json_output: bool) -> Result<ExitCode> {
    let report = build_report(song_key, song_scale);

    if json_output {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} {} -> {} {}",
        "Mapped:".cyan().bold(),
        report.song_key,
        report.song_scale,
        report.key,
        report.scale
    );
    if report.scale.as_str() != report.plays_as {
        println!("  {} plays as {}", "note:".yellow(), report.plays_as);
    }
    println!("  {} {}", "Notes:".dimmed(), report.notes.to_strings().join(" "));

    Ok(ExitCode::SUCCESS)
}
