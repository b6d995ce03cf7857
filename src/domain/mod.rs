//! Domain layer with core entities, events and the channel tree services.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Live event bodies.
pub mod events;
/// Port definitions.
pub mod ports;
pub mod search;
/// Channel path and matching services.
pub mod services;

pub use entities::{Channel, ChannelId, ChannelMap, SimpleChannel};
pub use errors::{ChannelError, ChannelResult, EventError};
pub use ports::EventSink;
pub use services::{ChannelDeepMatcher, ChannelPathResolver, MatchResult};
