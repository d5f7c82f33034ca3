//! CLI configuration file.
//!
//! A small JSON file supplying defaults for `--key`, `--scale` and
//! `--by-pitch`. Looked up at the `--config` path, else `gigso.json` in the
//! current directory. Command-line flags always win.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gigso.json";

/// Key used when neither the command line nor the config file names one.
pub const FALLBACK_KEY: &str = "D";

/// Scale used when neither the command line nor the config file names one.
pub const FALLBACK_SCALE: &str = "minor";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_pitch: Option<bool>,
}

impl CliConfig {
    /// Load the config at `path`, or the default file if it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Key from the command line, else the config, else `D`.
    pub fn key_or(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.key.clone())
            .unwrap_or_else(|| FALLBACK_KEY.to_string())
    }

    /// Scale from the command line, else the config, else `minor`.
    pub fn scale_or(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.scale.clone())
            .unwrap_or_else(|| FALLBACK_SCALE.to_string())
    }

    /// `true` if either the flag or the config asks for pitch order.
    pub fn by_pitch_or(&self, cli: bool) -> bool {
        cli || self.by_pitch.unwrap_or(false)
    }
}
