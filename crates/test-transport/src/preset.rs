use std::time::Duration;

use orion_chat_transport::ErrorKind;
use serde::{Deserialize, Serialize};

/// What a preset reply resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetOutcome {
    /// The backend answers with this (possibly absent) message.
    #[serde(rename = "message")]
    Message(Option<String>),
    /// The request fails with an error of this kind.
    #[serde(rename = "failure")]
    Failure(ErrorKind),
    /// The transport future panics while resolving.
    #[serde(rename = "panic")]
    Panic,
}

/// The preset reply for one user message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// How the request resolves.
    pub outcome: PresetOutcome,
    /// How long the request stays in flight. Defaults to 1ms.
    #[serde(default)]
    pub delay: Option<Duration>,
}

impl PresetReply {
    /// Creates a `PresetReply` that answers with the given text.
    #[inline]
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self {
            outcome: PresetOutcome::Message(Some(message.into())),
            delay: None,
        }
    }

    /// Creates a `PresetReply` whose body carries no message at all.
    #[inline]
    pub fn without_message() -> Self {
        Self {
            outcome: PresetOutcome::Message(None),
            delay: None,
        }
    }

    /// Creates a `PresetReply` that fails with the given kind.
    #[inline]
    pub fn with_failure(kind: ErrorKind) -> Self {
        Self {
            outcome: PresetOutcome::Failure(kind),
            delay: None,
        }
    }

    /// Creates a `PresetReply` that panics inside the transport future.
    #[inline]
    pub fn panicking() -> Self {
        Self {
            outcome: PresetOutcome::Panic,
            delay: None,
        }
    }

    /// Sets how long the request stays in flight.
    #[inline]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let reply = PresetReply::with_failure(ErrorKind::MalformedBody)
            .with_delay(Duration::from_millis(20));

        let serialized = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            serialized["outcome"],
            json!({ "type": "failure", "data": "malformed_body" })
        );

        let deserialized: PresetReply =
            serde_json::from_value(serialized).unwrap();
        assert_eq!(reply, deserialized);
    }

    #[test]
    fn test_deserialize_without_delay() {
        let reply: PresetReply = serde_json::from_value(json!({
            "outcome": { "type": "message", "data": "hi" }
        }))
        .unwrap();
        assert_eq!(reply, PresetReply::with_message("hi"));
    }

    #[test]
    fn test_deserialize_failure_and_panic() {
        let reply: PresetReply = serde_json::from_value(json!({
            "outcome": { "type": "failure", "data": "network" },
            "delay": { "secs": 1, "nanos": 0 }
        }))
        .unwrap();
        assert_eq!(
            reply,
            PresetReply::with_failure(ErrorKind::Network)
                .with_delay(Duration::from_secs(1))
        );

        let reply: PresetReply = serde_json::from_value(json!({
            "outcome": { "type": "panic" }
        }))
        .unwrap();
        assert_eq!(reply, PresetReply::panicking());
    }
}
