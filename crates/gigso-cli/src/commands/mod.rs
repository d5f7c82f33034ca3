//! CLI command implementations

pub mod catalog;
pub mod chords;
pub mod freq;
pub mod info;
pub mod layout;
pub mod map;
pub mod signature;
pub mod validate;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
