//! Domain entity definitions.

mod channel;
mod channel_map;
mod file_meta;
mod ids;
mod stamp;

pub use channel::{Channel, ChannelId, SimpleChannel};
pub use channel_map::ChannelMap;
pub use file_meta::{FileMeta, FileType};
pub use ids::{FileId, MessageId, StampId, UserGroupId, UserId};
pub use stamp::Stamp;
