//! Live event stream decoding and dispatch.

mod codec;
mod dispatch;
mod events;

pub use codec::EventParser;
pub use dispatch::{dispatch, receive};
pub use events::WsEvent;
