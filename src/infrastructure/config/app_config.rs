//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "roomtree";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Write logs to a file instead of stderr.
    #[serde(default)]
    pub log_to_file: bool,

    /// Channel snapshot (JSON array) to load.
    #[serde(default)]
    pub channels: Option<PathBuf>,

    /// Base URL that file paths are built under.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Maximum number of search results printed.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

fn default_api_base() -> String {
    "/api/v3".to_string()
}

fn default_search_limit() -> usize {
    20
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
            self.log_to_file = true;
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(channels) = &args.channels {
            self.channels = Some(channels.clone());
        }
        if let Some(api_base) = &args.api_base {
            self.api_base.clone_from(api_base);
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("roomtree.log"))
    }

    /// Returns default channel snapshot path.
    #[must_use]
    pub fn default_channels_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("channels.json"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path, or `None` when logging to stderr.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        if !self.log_to_file {
            return None;
        }
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective channel snapshot path.
    #[must_use]
    pub fn effective_channels_path(&self) -> Option<PathBuf> {
        self.channels.clone().or_else(Self::default_channels_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            log_to_file: false,
            channels: None,
            api_base: default_api_base(),
            search_limit: default_search_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"
            channels = "/tmp/channels.json"
            api_base = "https://q.example.com/api/v3"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.channels, Some(PathBuf::from("/tmp/channels.json")));
        assert_eq!(config.api_base, "https://q.example.com/api/v3");
        assert_eq!(config.search_limit, 20);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.api_base, "/api/v3");
        assert!(config.effective_log_path().is_none());
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config: AppConfig = toml::from_str(r#"log_level = "warn""#).unwrap();
        let args = CliArgs::parse_from([
            "roomtree",
            "--log-level",
            "trace",
            "--log-path",
            "/tmp/roomtree.log",
            "--api-base",
            "https://q.example.com/api/v3",
            "path",
            "aaaaaaaa-aaaa-4aaa-aaaa-aaaaaaaaaaab",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.api_base, "https://q.example.com/api/v3");
        assert_eq!(
            config.effective_log_path(),
            Some(PathBuf::from("/tmp/roomtree.log"))
        );
    }
}
