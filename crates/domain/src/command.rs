//! Commands — the wire-level unit sent to the RF station controller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value carried by a command: a button label or a numeric level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for CommandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for CommandValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CommandValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CommandValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One device command addressed to the controller.
///
/// Commands are fire-and-forget from the panel's point of view: the engine
/// makes a single delivery attempt and reports the outcome as a toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub device: String,
    pub value: CommandValue,
}

impl CommandRequest {
    #[must_use]
    pub fn new(device: impl Into<String>, value: impl Into<CommandValue>) -> Self {
        Self {
            device: device.into(),
            value: value.into(),
        }
    }

    /// Query pairs for the controller's GET-style control endpoint.
    #[must_use]
    pub fn to_query(&self) -> [(&'static str, String); 2] {
        [
            ("device", self.device.clone()),
            ("value", self.value.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_text_value_as_plain_string() {
        let val = CommandValue::from("On");
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "\"On\"");
    }

    #[test]
    fn should_serialize_number_value_as_number() {
        let val = CommandValue::from(255);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "255");
    }

    #[test]
    fn should_deserialize_number_as_number_variant() {
        let val: CommandValue = serde_json::from_str("75").unwrap();
        assert_eq!(val, CommandValue::Number(75));
    }

    #[test]
    fn should_display_values_without_quoting() {
        assert_eq!(CommandValue::from("Off").to_string(), "Off");
        assert_eq!(CommandValue::from(-3).to_string(), "-3");
    }

    #[test]
    fn should_build_query_pairs_from_request() {
        let request = CommandRequest::new("lampA", 100);
        let [device, value] = request.to_query();
        assert_eq!(device, ("device", "lampA".to_string()));
        assert_eq!(value, ("value", "100".to_string()));
    }

    #[test]
    fn should_roundtrip_request_through_serde_json() {
        let request = CommandRequest::new("heater", "On");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"device":"heater","value":"On"}"#);
        let parsed: CommandRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
