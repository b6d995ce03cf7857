use serde_json::Value;

use super::events::WsEvent;
use crate::domain::errors::EventError;

pub struct EventParser;

impl EventParser {
    /// Decodes one text frame of the event stream.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] describing which part of the frame is wrong.
    pub fn parse(data: &str) -> Result<WsEvent, EventError> {
        let value: Value = serde_json::from_str(data)?;

        let Some(kind) = value.get("type").and_then(Value::as_str) else {
            return Err(EventError::MissingType);
        };
        if !WsEvent::KINDS.iter().any(|k| *k == kind) {
            return Err(EventError::unknown_type(kind));
        }
        let kind = kind.to_owned();

        serde_json::from_value(value).map_err(|e| EventError::invalid_body(kind, e.to_string()))
    }
}
