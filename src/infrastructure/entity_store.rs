use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::{
    Channel, ChannelId, ChannelMap, MessageId, Stamp, StampId, UserGroupId, UserId,
};
use crate::domain::errors::ChannelResult;
use crate::domain::events::{
    ChannelBody, ChannelViewer, ChannelViewersBody, MessageBody, MessagePinBody,
    MessageStampedBody, MessageUnstampedBody, StampBody, UserBody, UserGroupBody,
    UserWebRtcStateBody, WebRtcSession,
};
use crate::domain::ports::EventSink;
use crate::domain::services::ChannelPathResolver;

/// Entity the REST layer must refetch after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchRequest {
    Channel(ChannelId),
    User(UserId),
    UserGroup(UserGroupId),
    Message(MessageId),
    Stamp(StampId),
}

/// Path change of a channel after a rename or a new parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMove {
    pub old_path: String,
    pub new_path: String,
}

/// One user's stamp on a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStamp {
    pub user_id: UserId,
    pub stamp_id: StampId,
    pub count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct EntityState {
    channels: ChannelMap,
    stamps: HashMap<StampId, Stamp>,
    online_users: HashSet<UserId>,
    last_seen: HashMap<UserId, DateTime<Utc>>,
    starred: HashSet<ChannelId>,
    unread: HashSet<ChannelId>,
    viewers: HashMap<ChannelId, Vec<ChannelViewer>>,
    webrtc: HashMap<UserId, (ChannelId, Vec<WebRtcSession>)>,
    message_stamps: HashMap<MessageId, Vec<MessageStamp>>,
    pinned: HashMap<MessageId, ChannelId>,
    pending: Vec<FetchRequest>,
}

impl EntityState {
    fn request(&mut self, request: FetchRequest) {
        if !self.pending.contains(&request) {
            self.pending.push(request);
        }
    }
}

/// Client-side entity cache fed by live events.
#[derive(Debug, Default)]
pub struct EntityStore {
    state: RwLock<EntityState>,
}

impl EntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a channel snapshot.
    #[must_use]
    pub fn with_channels(channels: ChannelMap) -> Self {
        let store = Self::new();
        store.state.write().channels = channels;
        store
    }

    /// Returns a copy of the current channel map.
    #[must_use]
    pub fn channels(&self) -> ChannelMap {
        self.state.read().channels.clone()
    }

    /// Resolves the full path string of a cached channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the cached parent chain loops.
    pub fn channel_path(&self, id: ChannelId) -> ChannelResult<String> {
        ChannelPathResolver::resolve_path_string(id, &self.state.read().channels)
    }

    /// Applies a channel fetched from the server. Returns the old and new
    /// path when a cached channel was renamed or moved.
    pub fn upsert_channel(&self, channel: Channel) -> Option<ChannelMove> {
        let id = channel.id();
        let mut state = self.state.write();
        state.pending.retain(|r| *r != FetchRequest::Channel(id));

        let old_path = ChannelPathResolver::resolve_path_string(id, &state.channels).ok();
        state.channels.upsert(channel);
        let new_path = ChannelPathResolver::resolve_path_string(id, &state.channels).ok()?;

        match old_path {
            Some(old_path) if !old_path.is_empty() && old_path != new_path => {
                debug!(%old_path, %new_path, "channel moved");
                Some(ChannelMove { old_path, new_path })
            }
            _ => None,
        }
    }

    /// Applies a stamp fetched from the server.
    pub fn upsert_stamp(&self, stamp: Stamp) {
        let mut state = self.state.write();
        state.pending.retain(|r| *r != FetchRequest::Stamp(stamp.id));
        state.stamps.insert(stamp.id, stamp);
    }

    #[must_use]
    pub fn stamp(&self, id: StampId) -> Option<Stamp> {
        self.state.read().stamps.get(&id).cloned()
    }

    #[must_use]
    pub fn is_online(&self, id: UserId) -> bool {
        self.state.read().online_users.contains(&id)
    }

    #[must_use]
    pub fn online_count(&self) -> usize {
        self.state.read().online_users.len()
    }

    /// When the user was last seen going offline.
    #[must_use]
    pub fn last_seen(&self, id: UserId) -> Option<DateTime<Utc>> {
        self.state.read().last_seen.get(&id).copied()
    }

    #[must_use]
    pub fn is_starred(&self, id: ChannelId) -> bool {
        self.state.read().starred.contains(&id)
    }

    pub fn mark_unread(&self, id: ChannelId) {
        self.state.write().unread.insert(id);
    }

    #[must_use]
    pub fn is_unread(&self, id: ChannelId) -> bool {
        self.state.read().unread.contains(&id)
    }

    #[must_use]
    pub fn viewers(&self, id: ChannelId) -> Vec<ChannelViewer> {
        self.state
            .read()
            .viewers
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Channel the user is in a call in, if any.
    #[must_use]
    pub fn call_channel(&self, id: UserId) -> Option<ChannelId> {
        self.state.read().webrtc.get(&id).map(|(channel, _)| *channel)
    }

    #[must_use]
    pub fn message_stamps(&self, id: MessageId) -> Vec<MessageStamp> {
        self.state
            .read()
            .message_stamps
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_pinned(&self, id: MessageId) -> bool {
        self.state.read().pinned.contains_key(&id)
    }

    /// Refetch queue in arrival order, left in place.
    #[must_use]
    pub fn pending_fetches(&self) -> Vec<FetchRequest> {
        self.state.read().pending.clone()
    }

    /// Drains the refetch queue in arrival order.
    pub fn take_pending_fetches(&self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.state.write().pending)
    }
}

impl EventSink for EntityStore {
    fn on_user_joined(&self, body: &UserBody) {
        self.state.write().request(FetchRequest::User(body.id));
    }

    fn on_user_left(&self, body: &UserBody) {
        let mut state = self.state.write();
        state.online_users.remove(&body.id);
        state.webrtc.remove(&body.id);
    }

    fn on_user_tags_updated(&self, body: &UserBody) {
        self.state.write().request(FetchRequest::User(body.id));
    }

    fn on_user_icon_updated(&self, body: &UserBody) {
        self.state.write().request(FetchRequest::User(body.id));
    }

    fn on_user_online(&self, body: &UserBody) {
        self.state.write().online_users.insert(body.id);
    }

    fn on_user_offline(&self, body: &UserBody) {
        let mut state = self.state.write();
        state.online_users.remove(&body.id);
        state.last_seen.insert(body.id, Utc::now());
    }

    fn on_user_webrtc_state_changed(&self, body: &UserWebRtcStateBody) {
        let mut state = self.state.write();
        if body.sessions.is_empty() {
            state.webrtc.remove(&body.user_id);
        } else {
            state
                .webrtc
                .insert(body.user_id, (body.channel_id, body.sessions.clone()));
        }
    }

    fn on_user_group_created(&self, body: &UserGroupBody) {
        self.state.write().request(FetchRequest::UserGroup(body.id));
    }

    fn on_user_group_updated(&self, body: &UserGroupBody) {
        self.state.write().request(FetchRequest::UserGroup(body.id));
    }

    fn on_user_group_deleted(&self, body: &UserGroupBody) {
        self.state
            .write()
            .pending
            .retain(|r| *r != FetchRequest::UserGroup(body.id));
    }

    fn on_channel_created(&self, body: &ChannelBody) {
        self.state.write().request(FetchRequest::Channel(body.id));
    }

    fn on_channel_deleted(&self, body: &ChannelBody) {
        let mut state = self.state.write();
        if state.channels.remove(body.id).is_some() {
            debug!(channel_id = %body.id, "channel removed from cache");
        }
        state.starred.remove(&body.id);
        state.unread.remove(&body.id);
        state.viewers.remove(&body.id);
        state.pending.retain(|r| *r != FetchRequest::Channel(body.id));
    }

    fn on_channel_updated(&self, body: &ChannelBody) {
        self.state.write().request(FetchRequest::Channel(body.id));
    }

    fn on_channel_stared(&self, body: &ChannelBody) {
        self.state.write().starred.insert(body.id);
    }

    fn on_channel_unstared(&self, body: &ChannelBody) {
        self.state.write().starred.remove(&body.id);
    }

    fn on_channel_viewers_changed(&self, body: &ChannelViewersBody) {
        self.state
            .write()
            .viewers
            .insert(body.id, body.viewers.clone());
    }

    fn on_message_created(&self, body: &MessageBody) {
        self.state.write().request(FetchRequest::Message(body.id));
    }

    fn on_message_updated(&self, body: &MessageBody) {
        self.state.write().request(FetchRequest::Message(body.id));
    }

    fn on_message_deleted(&self, body: &MessageBody) {
        let mut state = self.state.write();
        state.message_stamps.remove(&body.id);
        state.pinned.remove(&body.id);
        state.pending.retain(|r| *r != FetchRequest::Message(body.id));
    }

    fn on_message_read(&self, body: &ChannelBody) {
        self.state.write().unread.remove(&body.id);
    }

    fn on_message_stamped(&self, body: &MessageStampedBody) {
        let mut state = self.state.write();
        let stamps = state.message_stamps.entry(body.message_id).or_default();
        let stamp = MessageStamp {
            user_id: body.user_id,
            stamp_id: body.stamp_id,
            count: body.count,
            created_at: body.created_at,
        };
        match stamps
            .iter_mut()
            .find(|s| s.user_id == body.user_id && s.stamp_id == body.stamp_id)
        {
            Some(existing) => existing.count = body.count,
            None => stamps.push(stamp),
        }
    }

    fn on_message_unstamped(&self, body: &MessageUnstampedBody) {
        let mut state = self.state.write();
        if let Some(stamps) = state.message_stamps.get_mut(&body.message_id) {
            stamps.retain(|s| !(s.user_id == body.user_id && s.stamp_id == body.stamp_id));
        }
    }

    fn on_message_pinned(&self, body: &MessagePinBody) {
        self.state
            .write()
            .pinned
            .insert(body.message_id, body.channel_id);
    }

    fn on_message_unpinned(&self, body: &MessagePinBody) {
        self.state.write().pinned.remove(&body.message_id);
    }

    fn on_stamp_created(&self, body: &StampBody) {
        self.state.write().request(FetchRequest::Stamp(body.id));
    }

    fn on_stamp_updated(&self, body: &StampBody) {
        self.state.write().request(FetchRequest::Stamp(body.id));
    }

    fn on_stamp_deleted(&self, body: &StampBody) {
        let mut state = self.state.write();
        state.stamps.remove(&body.id);
        state.pending.retain(|r| *r != FetchRequest::Stamp(body.id));
    }
}
