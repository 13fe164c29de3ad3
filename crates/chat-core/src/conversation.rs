mod builder;
mod state;

use tokio::sync::{mpsc, oneshot, watch};

pub use builder::ConversationBuilder;
use state::Command;

use crate::error::Error;
use crate::timestamp::{Clock, format_timestamp};
use crate::transcript::Transcript;

/// Shown when the backend answers without any text.
pub const NO_RESPONSE_TEXT: &str = "😓 No response from AI.";

/// Shown when the exchange with the backend failed for whatever reason.
pub const FALLBACK_TEXT: &str = "😓 Oops! Something went wrong while fetching the response. Please try again.";

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The backend replied, the reply (or the no-response placeholder) has
    /// been appended.
    Fulfilled,
    /// The exchange failed, the fallback entry has been appended.
    Failed,
}

/// A read-only snapshot of a conversation, published after every change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationView {
    /// All entries so far.
    pub transcript: Transcript,
    /// Whether a reply is being awaited.
    ///
    /// Any settled submission clears this flag, even if other submissions
    /// are still in flight. See [`ConversationView::in_flight`].
    pub pending: bool,
    /// Number of submissions that have not settled yet.
    pub in_flight: usize,
}

/// A conversation with the assistant.
///
/// The conversation state lives in its own task and is only touched by
/// the commands sent to it, one at a time. Calls on this handle return as
/// soon as that task has applied the change, so [`Conversation::view`]
/// reflects it right away. They never wait for the backend: follow the
/// exchange through the [`Submission`] returned by
/// [`Conversation::submit`] or through [`Conversation::subscribe`].
///
/// Submissions are not serialized. If a message is submitted while another
/// one is still waiting for its reply, both requests are in flight at the
/// same time and their replies are appended in the order they arrive,
/// which is not necessarily the order they were submitted in.
#[derive(Clone)]
pub struct Conversation {
    command_tx: mpsc::UnboundedSender<Command>,
    view_rx: watch::Receiver<ConversationView>,
    clock: Clock,
}

impl Conversation {
    /// Submits a user message.
    ///
    /// When this returns, the user entry has been appended, the conversation
    /// is pending and the message has been handed to the transport. Blank
    /// text is rejected with [`ErrorKind::InvalidInput`](crate::ErrorKind)
    /// and leaves the conversation untouched.
    pub async fn submit<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<Submission, Error> {
        let text = text.into();
        if text.trim().is_empty() {
            debug!("ignoring a blank submission");
            return Err(Error::invalid_input());
        }

        let timestamp = format_timestamp(&(self.clock)());
        let (accepted_tx, accepted_rx) = oneshot::channel();
        let (settled_tx, settled_rx) = oneshot::channel();
        self.send(Command::Submit {
            text,
            timestamp,
            accepted_tx,
            settled_tx,
        })?;
        accepted_rx.await.map_err(|_| stopped())?;
        Ok(Submission { settled_rx })
    }

    /// Replaces the text of the most recent entry.
    ///
    /// Does nothing if the transcript is empty.
    pub async fn replace_last_entry_text<S: Into<String>>(
        &self,
        text: S,
    ) -> Result<(), Error> {
        let (done_tx, done_rx) = oneshot::channel();
        self.send(Command::ReplaceLastText {
            text: text.into(),
            done_tx,
        })?;
        done_rx.await.map_err(|_| stopped())
    }

    /// Returns the current snapshot.
    #[inline]
    pub fn view(&self) -> ConversationView {
        self.view_rx.borrow().clone()
    }

    /// Returns a receiver that is notified after every change.
    ///
    /// Borrowing from it avoids copying the transcript.
    #[inline]
    pub fn subscribe(&self) -> watch::Receiver<ConversationView> {
        self.view_rx.clone()
    }

    #[inline]
    fn send(&self, command: Command) -> Result<(), Error> {
        self.command_tx.send(command).map_err(|_| stopped())
    }
}

#[inline]
fn stopped() -> Error {
    Error::engine_stopped().with_reason("conversation task has exited")
}

/// A handle to a submitted message.
///
/// Dropping it doesn't cancel anything, the exchange runs to completion
/// either way.
#[derive(Debug)]
pub struct Submission {
    settled_rx: oneshot::Receiver<Outcome>,
}

impl Submission {
    /// Waits until the reply (or the fallback) has been appended.
    ///
    /// Returns `None` if the conversation task went away first.
    pub async fn settled(self) -> Option<Outcome> {
        self.settled_rx.await.ok()
    }
}
