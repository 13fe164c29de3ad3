use serde::{Deserialize, Serialize};

/// A message to be sent to the assistant.
///
/// This is also the exact JSON body the backend expects: `{"message": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRequest {
    /// The text the user typed, untrimmed.
    pub message: String,
}

impl MessageRequest {
    /// Creates a request carrying the given text.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}
