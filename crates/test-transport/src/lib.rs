//! A local fake transport for testing purpose.

mod preset;

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use orion_chat_transport::{
    ErrorKind, MessageReply, MessageRequest, Transport, TransportError,
};
use tokio::time::sleep;

pub use preset::*;

/// Error type for [`TestTransport`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}

impl TransportError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// A local fake transport for testing purpose.
///
/// Replies are looked up by the exact text of the incoming message. A
/// message without a preset fails with [`ErrorKind::Other`], which makes
/// unexpected traffic easy to spot in tests.
///
/// Each preset carries its own delay, so several requests in flight at the
/// same time can be made to resolve in any order.
#[derive(Clone, Default)]
pub struct TestTransport {
    replies: Arc<HashMap<String, PresetReply>>,
    default_delay: Option<Duration>,
}

impl TestTransport {
    /// Registers the reply for a user message, replacing any earlier one.
    #[inline]
    pub fn add_reply<S: Into<String>>(&mut self, input: S, reply: PresetReply) {
        Arc::make_mut(&mut self.replies).insert(input.into(), reply);
    }

    /// Sets the delay used by presets that don't specify one.
    #[inline]
    pub fn set_default_delay(&mut self, duration: Duration) {
        self.default_delay = Some(duration);
    }
}

impl Transport for TestTransport {
    type Error = crate::Error;

    fn send(
        &self,
        req: &MessageRequest,
    ) -> impl Future<Output = Result<MessageReply, Self::Error>> + Send + 'static
    {
        let preset = self.replies.get(&req.message).cloned();
        let default_delay =
            self.default_delay.unwrap_or(Duration::from_millis(1));
        let message = req.message.clone();

        async move {
            let Some(preset) = preset else {
                return Err(Error {
                    message: format!("no preset reply for {message:?}"),
                    kind: ErrorKind::Other,
                });
            };

            sleep(preset.delay.unwrap_or(default_delay)).await;

            match preset.outcome {
                PresetOutcome::Message(message) => Ok(MessageReply { message }),
                PresetOutcome::Failure(kind) => Err(Error {
                    message: "preset failure".to_owned(),
                    kind,
                }),
                PresetOutcome::Panic => {
                    panic!("preset panic while replying to {message:?}")
                }
            }
        }
    }
}
