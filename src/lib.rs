//! roomtree - channel tree core of a team chat client.
//!
//! This crate resolves and matches channel paths, completes words under the
//! input caret, and keeps a client-side entity cache in sync with the live
//! event stream.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing client-side services.
pub mod application;
/// Domain layer containing entities, errors, events, and channel services.
pub mod domain;
/// Infrastructure layer containing configuration, caching, and event adapters.
pub mod infrastructure;
/// Presentation layer containing CLI command output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "roomtree";
