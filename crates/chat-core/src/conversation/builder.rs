use std::sync::Arc;

use chrono::NaiveDateTime;
use orion_chat_transport::Transport;
use tokio::sync::{mpsc, watch};
use tracing::Instrument;

use super::state::{EngineState, run_engine};
use super::{Conversation, ConversationView};
use crate::timestamp::{Clock, system_clock};
use crate::transcript::Transcript;
use crate::transport_client::TransportClient;

/// [`Conversation`] builder.
pub struct ConversationBuilder {
    transport: TransportClient,
    session_id: Option<String>,
    clock: Clock,
    transcript: Transcript,
}

impl ConversationBuilder {
    /// Creates a new builder with the specified transport.
    #[inline]
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: TransportClient::new(transport),
            session_id: None,
            clock: system_clock(),
            transcript: Transcript::default(),
        }
    }

    /// Tags the conversation with an opaque session id.
    ///
    /// The id is only used to label log output.
    #[inline]
    pub fn with_session_id<S: Into<String>>(mut self, session_id: S) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Overrides where the submission time comes from.
    #[inline]
    pub fn with_clock(
        mut self,
        clock: impl Fn() -> NaiveDateTime + Send + Sync + 'static,
    ) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Starts from a previously saved transcript instead of an empty one.
    #[inline]
    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = transcript;
        self
    }

    /// Builds the conversation.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn build(self) -> Conversation {
        let Self {
            transport,
            session_id,
            clock,
            transcript,
        } = self;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (settle_tx, settle_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(ConversationView {
            transcript,
            ..Default::default()
        });

        let state = EngineState::new(transport, view_tx, settle_tx);
        let span = info_span!("conversation", session = session_id.as_deref());
        tokio::spawn(run_engine(state, command_rx, settle_rx).instrument(span));

        Conversation {
            command_tx,
            view_rx,
            clock,
        }
    }
}
