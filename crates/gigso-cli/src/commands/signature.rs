//! Signature command implementation

use anyhow::Result;
use colored::Colorize;
use gigso_scale::{map_external_key, map_external_scale, KeySignature, KeySignatureInfo};
use std::process::ExitCode;

use super::print_json;

/// Signature for a song key/scale, mapped onto the instrument vocabulary first.
pub fn build_info(key: &str, scale: &str) -> KeySignatureInfo {
    let key = map_external_key(key);
    let scale = map_external_scale(scale).engine_scale();
    KeySignature::new(key, scale).summary()
}

/// Run the signature command
pub fn run(key: &str, scale: &str, json_output: bool) -> Result<ExitCode> {
    let info = build_info(key, scale);

    if json_output {
        print_json(&info)?;
        return Ok(ExitCode::SUCCESS);
    }

    let accidentals = if info.sharps.is_empty() && info.flats.is_empty() {
        "none".to_string()
    } else {
        info.sharps
            .iter()
            .chain(info.flats.iter())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!("{}", info.display_name.cyan().bold());
    println!("  {} {}", "Written as:".dimmed(), info.conventional_name);
    println!("  {} {}", "Accidentals:".dimmed(), accidentals);
    println!("  {} {}", "Notes:".dimmed(), info.notes.join(" "));
    println!("  {} {}", "Circle of fifths:".dimmed(), info.circle_of_fifths);
    println!(
        "  {} {} major / {} minor",
        "Relatives:".dimmed(),
        info.relative_major,
        info.relative_minor
    );

    Ok(ExitCode::SUCCESS)
}
