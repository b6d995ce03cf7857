//! Domain error types.

mod channel_error;
mod event_error;

pub use channel_error::{ChannelError, ChannelResult};
pub use event_error::EventError;
