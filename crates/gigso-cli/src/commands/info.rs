//! Info command implementation

use anyhow::Result;
use colored::Colorize;
use gigso_scale::scale_info;
use std::process::ExitCode;

use super::print_json;

/// Run the info command
pub fn run(key: &str, scale: &str, json_output: bool) -> Result<ExitCode> {
    let info = scale_info(key, scale);

    if json_output {
        print_json(&info)?;
        return Ok(ExitCode::SUCCESS);
    }

    let pattern: Vec<String> = info.pattern.iter().map(|o| o.to_string()).collect();
    println!("{}", info.display_name.cyan().bold());
    println!("  {} {}", "Notes:".dimmed(), info.notes.to_strings().join(" "));
    println!("  {} {}", "Pattern:".dimmed(), pattern.join(" "));

    Ok(ExitCode::SUCCESS)
}
