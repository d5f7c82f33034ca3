//! Gigso CLI - Command-line interface for hand-pan scale layouts
//!
//! This binary exposes the scale engine and key mapper: layouts, note
//! frequencies, key signatures and song-key mapping.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gigso_cli::commands;
use gigso_cli::config::CliConfig;

/// Gigso - Hand-pan scale engine
#[derive(Parser)]
#[command(name = "gigso")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a JSON config file (default: ./gigso.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the eight-pad layout for a key and scale
    Layout {
        /// Root key (C, C#, D, ... B)
        #[arg(short, long)]
        key: Option<String>,

        /// Scale type (major, minor)
        #[arg(short, long)]
        scale: Option<String>,

        /// List pads in ascending pitch instead of layout order
        #[arg(long)]
        by_pitch: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the frequency of a note such as A4 or F#3
    Freq {
        /// Note name
        #[arg(short, long)]
        note: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported keys
    Keys {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported scale types
    Scales {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print notes, pattern and display name for a key and scale
    Info {
        /// Root key (C, C#, D, ... B)
        #[arg(short, long)]
        key: Option<String>,

        /// Scale type (major, minor)
        #[arg(short, long)]
        scale: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Map a song key and scale (flats, modes) onto the instrument
    Map {
        /// Song key (e.g. Bb, F#)
        #[arg(short, long)]
        key: Option<String>,

        /// Song scale or mode (e.g. dorian, pentatonic-minor)
        #[arg(short, long)]
        scale: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the key signature for a key and scale
    Signature {
        /// Key (flats are mapped to sharps)
        #[arg(short, long)]
        key: Option<String>,

        /// Scale or mode
        #[arg(short, long)]
        scale: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// List the diatonic triads of a key and scale
    Chords {
        /// Root key (C, C#, D, ... B)
        #[arg(short, long)]
        key: Option<String>,

        /// Scale type (major, minor)
        #[arg(short, long)]
        scale: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the engine supports a key and scale as given
    Validate {
        /// Root key
        #[arg(short, long)]
        key: String,

        /// Scale type
        #[arg(short, long)]
        scale: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command, cli.config.as_deref()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

/// Dispatches a command. The config file is only read by commands that
/// take their key or scale defaults from it.
fn run(command: Commands, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Layout {
            key,
            scale,
            by_pitch,
            json,
        } => {
            let config = CliConfig::load(config_path)?;
            commands::layout::run(
                &config.key_or(key),
                &config.scale_or(scale),
                config.by_pitch_or(by_pitch),
                json,
            )
        }
        Commands::Freq { note, json } => commands::freq::run(&note, json),
        Commands::Keys { json } => commands::catalog::keys(json),
        Commands::Scales { json } => commands::catalog::scales(json),
        Commands::Info { key, scale, json } => {
            let config = CliConfig::load(config_path)?;
            commands::info::run(&config.key_or(key), &config.scale_or(scale), json)
        }
        Commands::Map { key, scale, json } => {
            let config = CliConfig::load(config_path)?;
            commands::map::run(&config.key_or(key), &config.scale_or(scale), json)
        }
        Commands::Signature { key, scale, json } => {
            let config = CliConfig::load(config_path)?;
            commands::signature::run(&config.key_or(key), &config.scale_or(scale), json)
        }
        Commands::Chords { key, scale, json } => {
            let config = CliConfig::load(config_path)?;
            commands::chords::run(&config.key_or(key), &config.scale_or(scale), json)
        }
        Commands::Validate { key, scale } => commands::validate::run(&key, &scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_layout_defaults() {
        let cli = Cli::try_parse_from(["gigso", "layout"]).unwrap();
        match cli.command {
            Commands::Layout {
                key,
                scale,
                by_pitch,
                json,
            } => {
                assert!(key.is_none());
                assert!(scale.is_none());
                assert!(!by_pitch);
                assert!(!json);
            }
            _ => panic!("expected layout command"),
        }
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_layout_with_options() {
        let cli = Cli::try_parse_from([
            "gigso", "layout", "--key", "F#", "-s", "major", "--by-pitch", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Layout {
                key,
                scale,
                by_pitch,
                json,
            } => {
                assert_eq!(key.as_deref(), Some("F#"));
                assert_eq!(scale.as_deref(), Some("major"));
                assert!(by_pitch);
                assert!(json);
            }
            _ => panic!("expected layout command"),
        }
    }

    #[test]
    fn test_cli_requires_note_for_freq() {
        let err = Cli::try_parse_from(["gigso", "freq"]).err().unwrap();
        assert!(err.to_string().contains("--note"));
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gigso",
            "keys",
            "--config",
            "/tmp/gigso.json",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/gigso.json")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Keys { json: false }));
    }

    #[test]
    fn test_cli_requires_key_and_scale_for_validate() {
        let err = Cli::try_parse_from(["gigso", "validate", "--key", "C"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("--scale"));
    }

    #[test]
    fn test_cli_parses_map() {
        let cli =
            Cli::try_parse_from(["gigso", "map", "-k", "Bb", "-s", "dorian"]).unwrap();
        match cli.command {
            Commands::Map { key, scale, json } => {
                assert_eq!(key.as_deref(), Some("Bb"));
                assert_eq!(scale.as_deref(), Some("dorian"));
                assert!(!json);
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn test_config_free_commands_ignore_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gigso.json");
        std::fs::write(&path, "{ not json").unwrap();

        let keys = Cli::try_parse_from(["gigso", "keys"]).unwrap();
        assert!(run(keys.command, Some(&path)).is_ok());

        let validate =
            Cli::try_parse_from(["gigso", "validate", "-k", "C", "-s", "major"]).unwrap();
        assert!(run(validate.command, Some(&path)).is_ok());
    }

    #[test]
    fn test_config_commands_report_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gigso.json");
        std::fs::write(&path, "{ not json").unwrap();

        for args in [
            ["gigso", "layout"],
            ["gigso", "info"],
            ["gigso", "map"],
            ["gigso", "signature"],
            ["gigso", "chords"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(run(cli.command, Some(&path)).is_err(), "{:?}", args);
        }
    }

    #[test]
    fn test_missing_explicit_config_only_fails_config_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let freq = Cli::try_parse_from(["gigso", "freq", "-n", "A4"]).unwrap();
        assert!(run(freq.command, Some(&path)).is_ok());

        let layout = Cli::try_parse_from(["gigso", "layout"]).unwrap();
        assert!(run(layout.command, Some(&path)).is_err());
    }
}
