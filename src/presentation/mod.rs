//! Presentation layer rendering CLI command output.

/// Subcommand runner.
pub mod commands;

pub use commands::{CommandError, CommandRunner};
