//! Chat channel entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub Uuid);

impl ChannelId {
    /// Parent marker of direct-message channels. Never part of a channel path.
    pub const DM_PARENT: Self = Self(Uuid::from_u128(0xaaaa_aaaa_aaaa_4aaa_aaaa_aaaa_aaaa_aaaa));

    /// Builds an id from a raw 128-bit value.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(self) -> Uuid {
        self.0
    }

    /// Returns true if this is the direct-message parent marker.
    #[must_use]
    pub fn is_dm_parent(self) -> bool {
        self == Self::DM_PARENT
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ChannelId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ChannelId {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl std::str::FromStr for ChannelId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Channel information as cached by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    id: ChannelId,
    name: String,
    #[serde(default)]
    parent_id: Option<ChannelId>,
    #[serde(default)]
    children: Vec<ChannelId>,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    force: bool,
}

impl Channel {
    /// Creates a root channel with no children.
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            children: Vec::new(),
            topic: String::new(),
            archived: false,
            force: false,
        }
    }

    /// Sets the parent channel ID.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<ChannelId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the child channel IDs.
    #[must_use]
    pub fn with_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChannelId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the channel topic.
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Marks the channel as archived.
    #[must_use]
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Returns the channel ID.
    #[must_use]
    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// Returns the channel name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent channel ID, if any.
    #[must_use]
    pub fn parent_id(&self) -> Option<ChannelId> {
        self.parent_id
    }

    /// Returns the child channel IDs in display order.
    #[must_use]
    pub fn children(&self) -> &[ChannelId] {
        &self.children
    }

    /// Returns the channel topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns whether the channel is archived.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns whether every member is forced to receive notifications.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.force
    }

    /// Returns true if this channel lives under the direct-message parent.
    #[must_use]
    pub fn is_dm(&self) -> bool {
        self.parent_id.is_some_and(ChannelId::is_dm_parent)
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ChannelId> {
        &mut self.children
    }
}

/// Path element produced when resolving a channel path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleChannel {
    pub id: ChannelId,
    pub name: String,
}

impl From<&Channel> for SimpleChannel {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id(),
            name: channel.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_creation() {
        let channel = Channel::new(1_u128, "general").with_children([2_u128, 3_u128]);

        assert_eq!(channel.id(), ChannelId::from_u128(1));
        assert_eq!(channel.name(), "general");
        assert_eq!(channel.children().len(), 2);
        assert!(channel.parent_id().is_none());
    }

    #[test]
    fn test_dm_parent_sentinel() {
        let dm = Channel::new(5_u128, "dm").with_parent(ChannelId::DM_PARENT);
        assert!(dm.is_dm());
        assert_eq!(
            ChannelId::DM_PARENT.to_string(),
            "aaaaaaaa-aaaa-4aaa-aaaa-aaaaaaaaaaaa"
        );
    }

    #[test]
    fn test_deserialize_snapshot_entry() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000002",
            "name": "random",
            "parentId": "00000000-0000-0000-0000-000000000001",
            "children": []
        }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.parent_id(), Some(ChannelId::from_u128(1)));
        assert!(!channel.is_archived());
        assert_eq!(channel.topic(), "");
    }
}
