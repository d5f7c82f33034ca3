//! Validate command implementation

use anyhow::Result;
use colored::Colorize;
use gigso_scale::validate_key_and_scale;
use std::process::ExitCode;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if the engine supports the pair as given, 1 otherwise
pub fn run(key: &str, scale: &str) -> Result<ExitCode> {
    if validate_key_and_scale(key, scale) {
        println!("{} {} {}", "VALID".green().bold(), key, scale);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} {} {}", "INVALID".red().bold(), key, scale);
        Ok(ExitCode::from(1))
    }
}
