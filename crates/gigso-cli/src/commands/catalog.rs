//! Keys and scales command implementations

use anyhow::Result;
use colored::Colorize;
use gigso_scale::{all_keys, all_scale_types};
use std::process::ExitCode;

use super::print_json;

/// List the twelve supported keys.
pub fn keys(json_output: bool) -> Result<ExitCode> {
    list("Keys:", &all_keys(), json_output)
}

/// List the supported scale types.
pub fn scales(json_output: bool) -> Result<ExitCode> {
    list("Scale types:", &all_scale_types(), json_output)
}

fn list(title: &str, items: &[&str], json_output: bool) -> Result<ExitCode> {
    if json_output {
        print_json(&items)?;
    } else {
        println!("{} {}", title.cyan().bold(), items.join(" "));
    }
    Ok(ExitCode::SUCCESS)
}
