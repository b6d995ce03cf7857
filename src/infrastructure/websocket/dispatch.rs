use tracing::{debug, warn};

use super::codec::EventParser;
use super::events::WsEvent;
use crate::domain::errors::EventError;
use crate::domain::ports::EventSink;

/// Forwards a decoded event to the matching sink method.
pub fn dispatch(event: &WsEvent, sink: &dyn EventSink) {
    match event {
        WsEvent::UserJoined(body) => sink.on_user_joined(body),
        WsEvent::UserLeft(body) => sink.on_user_left(body),
        WsEvent::UserTagsUpdated(body) => sink.on_user_tags_updated(body),
        WsEvent::UserIconUpdated(body) => sink.on_user_icon_updated(body),
        WsEvent::UserOnline(body) => sink.on_user_online(body),
        WsEvent::UserOffline(body) => sink.on_user_offline(body),
        WsEvent::UserWebrtcStateChanged(body) => sink.on_user_webrtc_state_changed(body),
        WsEvent::UserGroupCreated(body) => sink.on_user_group_created(body),
        WsEvent::UserGroupUpdated(body) => sink.on_user_group_updated(body),
        WsEvent::UserGroupDeleted(body) => sink.on_user_group_deleted(body),
        WsEvent::ChannelCreated(body) => sink.on_channel_created(body),
        WsEvent::ChannelDeleted(body) => sink.on_channel_deleted(body),
        WsEvent::ChannelUpdated(body) => sink.on_channel_updated(body),
        WsEvent::ChannelStared(body) => sink.on_channel_stared(body),
        WsEvent::ChannelUnstared(body) => sink.on_channel_unstared(body),
        WsEvent::ChannelViewersChanged(body) => sink.on_channel_viewers_changed(body),
        WsEvent::MessageCreated(body) => sink.on_message_created(body),
        WsEvent::MessageUpdated(body) => sink.on_message_updated(body),
        WsEvent::MessageDeleted(body) => sink.on_message_deleted(body),
        WsEvent::MessageRead(body) => sink.on_message_read(body),
        WsEvent::MessageStamped(body) => sink.on_message_stamped(body),
        WsEvent::MessageUnstamped(body) => sink.on_message_unstamped(body),
        WsEvent::MessagePinned(body) => sink.on_message_pinned(body),
        WsEvent::MessageUnpinned(body) => sink.on_message_unpinned(body),
        WsEvent::StampCreated(body) => sink.on_stamp_created(body),
        WsEvent::StampUpdated(body) => sink.on_stamp_updated(body),
        WsEvent::StampDeleted(body) => sink.on_stamp_deleted(body),
    }
}

/// Decodes a text frame and dispatches it.
///
/// # Errors
///
/// Returns the decode error after logging it; the sink is not called.
pub fn receive(data: &str, sink: &dyn EventSink) -> Result<WsEvent, EventError> {
    match EventParser::parse(data) {
        Ok(event) => {
            debug!(kind = event.kind(), "event received");
            dispatch(&event, sink);
            Ok(event)
        }
        Err(e) => {
            warn!(error = %e, data, "invalid event received");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChannelId, UserId};
    use crate::domain::ports::MockEventSink;
    use mockall::predicate::*;

    #[test]
    fn test_receive_routes_to_sink() {
        let mut sink = MockEventSink::new();
        sink.expect_on_user_online()
            .withf(|body| body.id == UserId::from_u128(0xa))
            .times(1)
            .return_const(());

        let event = receive(
            r#"{"type":"USER_ONLINE","body":{"id":"00000000-0000-0000-0000-00000000000a"}}"#,
            &sink,
        )
        .unwrap();
        assert_eq!(event.kind(), "USER_ONLINE");
    }

    #[test]
    fn test_message_read_carries_channel() {
        let mut sink = MockEventSink::new();
        sink.expect_on_message_read()
            .with(function(|body: &crate::domain::events::ChannelBody| {
                body.id == ChannelId::from_u128(3)
            }))
            .times(1)
            .return_const(());

        receive(
            r#"{"type":"MESSAGE_READ","body":{"id":"00000000-0000-0000-0000-000000000003"}}"#,
            &sink,
        )
        .unwrap();
    }

    #[test]
    fn test_invalid_frame_does_not_reach_sink() {
        let sink = MockEventSink::new();

        assert!(receive(r#"{"body":{}}"#, &sink).is_err());
        assert!(receive("[]", &sink).is_err());
    }
}
