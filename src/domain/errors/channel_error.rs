//! Channel tree error types.

use thiserror::Error;

use crate::domain::entities::ChannelId;

/// Errors raised by channel path resolution and deep matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ChannelError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("channel graph is not a forest: {channel_id} is reachable from itself")]
    GraphIntegrity { channel_id: ChannelId },
}

impl ChannelError {
    /// Creates invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates graph integrity error for the channel that closed the cycle.
    #[must_use]
    pub const fn cycle_at(channel_id: ChannelId) -> Self {
        Self::GraphIntegrity { channel_id }
    }
}

/// Result alias for channel tree operations.
pub type ChannelResult<T> = Result<T, ChannelError>;
