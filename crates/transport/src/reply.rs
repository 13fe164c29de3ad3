use serde::{Deserialize, Serialize};

/// A reply from the assistant.
///
/// The backend is allowed to omit `message` or send an empty one, callers
/// decide what to show in that case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageReply {
    /// The assistant text, as received.
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageReply {
    /// Creates a reply carrying the given text.
    #[inline]
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Returns the message if it is present and non-empty.
    #[inline]
    pub fn non_empty_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
