//! Gigso CLI library.
//!
//! Command implementations and configuration loading for the `gigso` binary.

pub mod commands;
pub mod config;
