//! Command-line interface for soko-harness.
//!
//! Provides the `run` command that drives the full solver battery.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli, Commands, RunArgs};
