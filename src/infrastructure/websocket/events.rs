use serde::{Deserialize, Serialize};

use crate::domain::events::{
    ChannelBody, ChannelViewersBody, MessageBody, MessagePinBody, MessageStampedBody,
    MessageUnstampedBody, StampBody, UserBody, UserGroupBody, UserWebRtcStateBody,
};

/// Live event frame, `{"type": "...", "body": {...}}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "body", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WsEvent {
    UserJoined(UserBody),
    UserLeft(UserBody),
    UserTagsUpdated(UserBody),
    UserIconUpdated(UserBody),
    UserOnline(UserBody),
    UserOffline(UserBody),
    UserWebrtcStateChanged(UserWebRtcStateBody),
    UserGroupCreated(UserGroupBody),
    UserGroupUpdated(UserGroupBody),
    UserGroupDeleted(UserGroupBody),

    ChannelCreated(ChannelBody),
    ChannelDeleted(ChannelBody),
    ChannelUpdated(ChannelBody),
    ChannelStared(ChannelBody),
    ChannelUnstared(ChannelBody),
    ChannelViewersChanged(ChannelViewersBody),

    MessageCreated(MessageBody),
    MessageUpdated(MessageBody),
    MessageDeleted(MessageBody),
    MessageRead(ChannelBody),
    MessageStamped(MessageStampedBody),
    MessageUnstamped(MessageUnstampedBody),
    MessagePinned(MessagePinBody),
    MessageUnpinned(MessagePinBody),

    StampCreated(StampBody),
    #[serde(alias = "STAMP_MODIFIED")]
    StampUpdated(StampBody),
    StampDeleted(StampBody),
}

impl WsEvent {
    /// Every `type` value the decoder accepts.
    pub const KINDS: [&'static str; 28] = [
        "USER_JOINED",
        "USER_LEFT",
        "USER_TAGS_UPDATED",
        "USER_ICON_UPDATED",
        "USER_ONLINE",
        "USER_OFFLINE",
        "USER_WEBRTC_STATE_CHANGED",
        "USER_GROUP_CREATED",
        "USER_GROUP_UPDATED",
        "USER_GROUP_DELETED",
        "CHANNEL_CREATED",
        "CHANNEL_DELETED",
        "CHANNEL_UPDATED",
        "CHANNEL_STARED",
        "CHANNEL_UNSTARED",
        "CHANNEL_VIEWERS_CHANGED",
        "MESSAGE_CREATED",
        "MESSAGE_UPDATED",
        "MESSAGE_DELETED",
        "MESSAGE_READ",
        "MESSAGE_STAMPED",
        "MESSAGE_UNSTAMPED",
        "MESSAGE_PINNED",
        "MESSAGE_UNPINNED",
        "STAMP_CREATED",
        "STAMP_UPDATED",
        "STAMP_MODIFIED",
        "STAMP_DELETED",
    ];

    /// Returns the wire `type` of this event.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UserJoined(_) => "USER_JOINED",
            Self::UserLeft(_) => "USER_LEFT",
            Self::UserTagsUpdated(_) => "USER_TAGS_UPDATED",
            Self::UserIconUpdated(_) => "USER_ICON_UPDATED",
            Self::UserOnline(_) => "USER_ONLINE",
            Self::UserOffline(_) => "USER_OFFLINE",
            Self::UserWebrtcStateChanged(_) => "USER_WEBRTC_STATE_CHANGED",
            Self::UserGroupCreated(_) => "USER_GROUP_CREATED",
            Self::UserGroupUpdated(_) => "USER_GROUP_UPDATED",
            Self::UserGroupDeleted(_) => "USER_GROUP_DELETED",
            Self::ChannelCreated(_) => "CHANNEL_CREATED",
            Self::ChannelDeleted(_) => "CHANNEL_DELETED",
            Self::ChannelUpdated(_) => "CHANNEL_UPDATED",
            Self::ChannelStared(_) => "CHANNEL_STARED",
            Self::ChannelUnstared(_) => "CHANNEL_UNSTARED",
            Self::ChannelViewersChanged(_) => "CHANNEL_VIEWERS_CHANGED",
            Self::MessageCreated(_) => "MESSAGE_CREATED",
            Self::MessageUpdated(_) => "MESSAGE_UPDATED",
            Self::MessageDeleted(_) => "MESSAGE_DELETED",
            Self::MessageRead(_) => "MESSAGE_READ",
            Self::MessageStamped(_) => "MESSAGE_STAMPED",
            Self::MessageUnstamped(_) => "MESSAGE_UNSTAMPED",
            Self::MessagePinned(_) => "MESSAGE_PINNED",
            Self::MessageUnpinned(_) => "MESSAGE_UNPINNED",
            Self::StampCreated(_) => "STAMP_CREATED",
            Self::StampUpdated(_) => "STAMP_UPDATED",
            Self::StampDeleted(_) => "STAMP_DELETED",
        }
    }

    #[must_use]
    pub const fn is_channel_event(&self) -> bool {
        matches!(
            self,
            Self::ChannelCreated(_)
                | Self::ChannelDeleted(_)
                | Self::ChannelUpdated(_)
                | Self::ChannelStared(_)
                | Self::ChannelUnstared(_)
                | Self::ChannelViewersChanged(_)
        )
    }
}
