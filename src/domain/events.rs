//! Bodies of live server events.
//!
//! Most events only carry ids; the client refetches anything else it needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::{ChannelId, MessageId, StampId, UserGroupId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBody {
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWebRtcStateBody {
    pub user_id: UserId,
    pub channel_id: ChannelId,
    #[serde(default)]
    pub sessions: Vec<WebRtcSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebRtcSession {
    pub state: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupBody {
    pub id: UserGroupId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBody {
    pub id: ChannelId,
    /// Set when the channel is a direct-message channel with this user.
    #[serde(default)]
    pub dm_user_id: Option<UserId>,
}

/// What a viewer is doing in a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    None,
    Monitoring,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelViewer {
    pub user_id: UserId,
    #[serde(default)]
    pub state: ViewState,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelViewersBody {
    pub id: ChannelId,
    #[serde(default)]
    pub viewers: Vec<ChannelViewer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub id: MessageId,
    /// Set when the new message quotes one of the current user's messages.
    #[serde(default)]
    pub is_citing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStampedBody {
    pub message_id: MessageId,
    pub user_id: UserId,
    pub stamp_id: StampId,
    pub count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageUnstampedBody {
    pub message_id: MessageId,
    pub user_id: UserId,
    pub stamp_id: StampId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePinBody {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampBody {
    pub id: StampId,
}
