//! Live event decoding error types.

use thiserror::Error;

/// Errors raised while decoding a live event frame.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum EventError {
    #[error("event frame is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("event frame has no string `type` field")]
    MissingType,

    #[error("unknown event type `{kind}`")]
    UnknownType { kind: String },

    #[error("invalid body for `{kind}`: {message}")]
    InvalidBody { kind: String, message: String },
}

impl EventError {
    /// Creates unknown type error.
    #[must_use]
    pub fn unknown_type(kind: impl Into<String>) -> Self {
        Self::UnknownType { kind: kind.into() }
    }

    /// Creates invalid body error.
    #[must_use]
    pub fn invalid_body(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidBody {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Returns whether the frame may come from a newer server and can be skipped.
    #[must_use]
    pub const fn is_ignorable(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }
}
