//! Layout command implementation
//!
//! Prints the eight pads for a key and scale, with frequencies.

use anyhow::Result;
use colored::Colorize;
use gigso_scale::pitch::resolve_key;
use gigso_scale::scale::resolve_scale;
use gigso_scale::{validate_key_and_scale, HandPanLayout, Note};
use serde::Serialize;
use std::process::ExitCode;

use super::print_json;

/// One pad of the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PadReport {
    /// Pad index in layout order (0-7).
    pub pad: usize,
    pub note: Note,
    pub frequency_hz: f64,
}

/// Layout for a key/scale request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub requested_key: String,
    pub requested_scale: String,
    pub key: String,
    pub scale: String,
    /// Whether a default replaced the requested key or scale.
    pub substituted: bool,
    pub pads: Vec<PadReport>,
}

/// Build the layout report. Pads keep their layout index even when sorted.
pub fn build_report(key: &str, scale: &str, by_pitch: bool) -> LayoutReport {
    let resolved_key = resolve_key(key);
    let resolved_scale = resolve_scale(scale);
    let layout = HandPanLayout::new(resolved_key, resolved_scale);

    let mut pads: Vec<PadReport> = layout
        .iter()
        .enumerate()
        .map(|(pad, note)| PadReport {
            pad,
            note: *note,
            frequency_hz: note.frequency(),
        })
        .collect();
    if by_pitch {
        pads.sort_by_key(|p| p.note.semitones_from_a4());
    }

    LayoutReport {
        requested_key: key.to_string(),
        requested_scale: scale.to_string(),
        key: resolved_key.to_string(),
        scale: resolved_scale.to_string(),
        substituted: !validate_key_and_scale(key, scale),
        pads,
    }
}

/// Run the layout command
///
/// # Arguments
/// * `key` - Root key (sharp spelling)
/// * `scale` - Scale type (`major` or `minor`)
/// * `by_pitch` - List pads in ascending pitch instead of layout order
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(key: &str, scale: &str, by_pitch: bool, json_output: bool) -> Result<ExitCode> {
    let report = build_report(key, scale, by_pitch);

    if json_output {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} {}",
        "Hand pan layout:".cyan().bold(),
        report.key,
        report.scale
    );
    if report.substituted {
        println!(
            "  {} '{} {}' is not supported, showing the default",
            "note:".yellow(),
            report.requested_key,
            report.requested_scale
        );
    }
    for pad in &report.pads {
        println!(
            "  {} {:<4} {:>8.2} Hz",
            format!("pad {}", pad.pad).dimmed(),
            pad.note.to_string(),
            pad.frequency_hz
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report_layout_order() {
        let report = build_report("C", "major", false);
        assert!(!report.substituted);
        let notes: Vec<String> = report.pads.iter().map(|p| p.note.to_string()).collect();
        assert_eq!(notes, ["C4", "E4", "G4", "B4", "D3", "F3", "A3", "D3"]);
        assert_eq!(report.pads[7].pad, 7);
    }

    #[test]
    fn test_build_report_by_pitch() {
        let report = build_report("C", "major", true);
        let first = &report.pads[0];
        assert_eq!(first.note.to_string(), "D3");
        assert_eq!(first.pad, 4);
        assert!(report
            .pads
            .windows(2)
            .all(|w| w[0].frequency_hz <= w[1].frequency_hz));
    }

    #[test]
    fn test_build_report_substitution() {
        let report = build_report("H", "lydian", false);
        assert!(report.substituted);
        assert_eq!(report.key, "D");
        assert_eq!(report.scale, "minor");
        assert_eq!(report.requested_key, "H");
    }
}
