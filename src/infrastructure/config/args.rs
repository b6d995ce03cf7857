use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::entities::{ChannelId, FileId};

#[derive(Debug, Parser)]
#[command(
    name = "roomtree",
    version,
    about = "Channel tree lookup, matching and input completion for a team chat client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Channel snapshot (JSON array) path.
    #[arg(long, value_name = "PATH", global = true)]
    pub channels: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Base URL for file paths.
    #[arg(long, value_name = "URL", global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the full path of a channel.
    Path {
        /// Channel id.
        id: ChannelId,
    },
    /// Match a slash-separated query against the channel tree.
    Search {
        /// Query such as `gen/ran`.
        query: String,

        /// Rank channels by fuzzy score instead of segment matching.
        #[arg(long)]
        fuzzy: bool,

        /// Only accept these channels as match leaves.
        #[arg(long = "target", value_name = "ID")]
        targets: Vec<ChannelId>,
    },
    /// Show the completion state for a text buffer.
    Complete {
        /// Input text.
        text: String,

        /// Caret position in chars.
        #[arg(long)]
        cursor: usize,

        /// Candidate completion.
        #[arg(long = "candidate", value_name = "WORD")]
        candidates: Vec<String>,
    },
    /// Feed newline-delimited events into the entity store.
    Replay {
        /// Event file.
        file: PathBuf,

        /// Channel snapshot that answers channel refetches after the replay.
        #[arg(long, value_name = "PATH")]
        refreshed: Option<PathBuf>,
    },
    /// Show display fields of an uploaded file.
    File {
        /// File id.
        id: FileId,

        /// File metadata (JSON array) path.
        #[arg(long, value_name = "PATH")]
        files: PathBuf,
    },
}
