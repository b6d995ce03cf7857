//! Infrastructure layer with configuration, caching and event adapters.

/// Application configuration.
pub mod config;
/// Event-fed entity cache.
pub mod entity_store;
pub mod search;
/// JSON snapshot loaders.
pub mod snapshot;
/// Live event decoding.
pub mod websocket;

pub use config::{AppConfig, BrowserSettings, CliArgs, Command, LogLevel, StorageManager};
pub use entity_store::{ChannelMove, EntityStore, FetchRequest};
pub use search::{ChannelSearchProvider, FuzzySearcher};
pub use snapshot::SnapshotError;
pub use websocket::{EventParser, WsEvent, dispatch, receive};
