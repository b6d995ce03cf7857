use crate::domain::events::{
    ChannelBody, ChannelViewersBody, MessageBody, MessagePinBody, MessageStampedBody,
    MessageUnstampedBody, StampBody, UserBody, UserGroupBody, UserWebRtcStateBody,
};

/// Receiver of decoded live events.
///
/// Every method defaults to a no-op so consumers only implement the events
/// they track.
#[cfg_attr(test, mockall::automock)]
#[allow(unused_variables)]
pub trait EventSink: Send + Sync {
    fn on_user_joined(&self, body: &UserBody) {}
    fn on_user_left(&self, body: &UserBody) {}
    fn on_user_tags_updated(&self, body: &UserBody) {}
    fn on_user_icon_updated(&self, body: &UserBody) {}
    fn on_user_online(&self, body: &UserBody) {}
    fn on_user_offline(&self, body: &UserBody) {}
    fn on_user_webrtc_state_changed(&self, body: &UserWebRtcStateBody) {}
    fn on_user_group_created(&self, body: &UserGroupBody) {}
    fn on_user_group_updated(&self, body: &UserGroupBody) {}
    fn on_user_group_deleted(&self, body: &UserGroupBody) {}

    fn on_channel_created(&self, body: &ChannelBody) {}
    fn on_channel_deleted(&self, body: &ChannelBody) {}
    fn on_channel_updated(&self, body: &ChannelBody) {}
    fn on_channel_stared(&self, body: &ChannelBody) {}
    fn on_channel_unstared(&self, body: &ChannelBody) {}
    fn on_channel_viewers_changed(&self, body: &ChannelViewersBody) {}

    fn on_message_created(&self, body: &MessageBody) {}
    fn on_message_updated(&self, body: &MessageBody) {}
    fn on_message_deleted(&self, body: &MessageBody) {}
    fn on_message_read(&self, body: &ChannelBody) {}
    fn on_message_stamped(&self, body: &MessageStampedBody) {}
    fn on_message_unstamped(&self, body: &MessageUnstampedBody) {}
    fn on_message_pinned(&self, body: &MessagePinBody) {}
    fn on_message_unpinned(&self, body: &MessagePinBody) {}

    fn on_stamp_created(&self, body: &StampBody) {}
    fn on_stamp_updated(&self, body: &StampBody) {}
    fn on_stamp_deleted(&self, body: &StampBody) {}
}
