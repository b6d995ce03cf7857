//! Pure channel tree services.

mod channel_matcher;
mod channel_path;

pub use channel_matcher::{ChannelDeepMatcher, MatchKind, MatchResult};
pub use channel_path::{ChannelPathResolver, MAX_CHANNEL_DEPTH, PATH_SEPARATOR};
