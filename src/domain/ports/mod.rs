mod event_sink_port;

pub use event_sink_port::EventSink;

#[cfg(test)]
pub use event_sink_port::MockEventSink;
