//! Application configuration.

pub mod app_config;
pub mod args;
pub mod browser_settings;
pub mod storage;

pub use app_config::{AppConfig, LogLevel};
pub use args::{CliArgs, Command};
pub use browser_settings::{BrowserSettings, OpenMode, replace_prefix};
pub use storage::{ConfigError, StorageManager};
