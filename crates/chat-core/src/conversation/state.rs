use std::collections::HashMap;
use std::fmt::{self, Debug};

use orion_chat_transport::{MessageReply, MessageRequest};
use tokio::select;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::Instrument;

use super::{ConversationView, FALLBACK_TEXT, NO_RESPONSE_TEXT, Outcome};
use crate::transcript::{Sender, TranscriptEntry};
use crate::transport_client::TransportClient;

pub(super) enum Command {
    Submit {
        text: String,
        timestamp: String,
        accepted_tx: oneshot::Sender<()>,
        settled_tx: oneshot::Sender<Outcome>,
    },
    ReplaceLastText {
        text: String,
        done_tx: oneshot::Sender<()>,
    },
}

impl Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Submit { text, timestamp, .. } => f
                .debug_struct("Submit")
                .field("text", text)
                .field("timestamp", timestamp)
                .finish_non_exhaustive(),
            Command::ReplaceLastText { text, .. } => f
                .debug_struct("ReplaceLastText")
                .field("text", text)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug)]
pub(super) enum Settlement {
    Replied(MessageReply),
    Failed,
}

#[derive(Debug)]
pub(super) struct Settled {
    request_id: u64,
    settlement: Settlement,
}

struct InFlight {
    timestamp: String,
    settled_tx: oneshot::Sender<Outcome>,
}

/// The engine's own bookkeeping.
///
/// The transcript and the pending flag live in the published view only and
/// are changed in place, so publishing never copies the transcript.
pub(super) struct EngineState {
    transport: TransportClient,
    in_flight: HashMap<u64, InFlight>,
    next_request_id: u64,
    view_tx: watch::Sender<ConversationView>,
    settle_tx: mpsc::UnboundedSender<Settled>,
}

impl EngineState {
    pub fn new(
        transport: TransportClient,
        view_tx: watch::Sender<ConversationView>,
        settle_tx: mpsc::UnboundedSender<Settled>,
    ) -> Self {
        Self {
            transport,
            in_flight: Default::default(),
            next_request_id: 1,
            view_tx,
            settle_tx,
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Submit {
                text,
                timestamp,
                accepted_tx,
                settled_tx,
            } => {
                self.submit(text, timestamp, settled_tx);
                // The submitter may have given up waiting.
                accepted_tx.send(()).ok();
            }
            Command::ReplaceLastText { text, done_tx } => {
                let replaced = self.view_tx.send_if_modified(|view| {
                    view.transcript.replace_last_text(text)
                });
                if !replaced {
                    debug!("nothing to replace, the transcript is empty");
                }
                done_tx.send(()).ok();
            }
        }
    }

    fn submit(
        &mut self,
        text: String,
        timestamp: String,
        settled_tx: oneshot::Sender<Outcome>,
    ) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let entry =
            TranscriptEntry::new(text.clone(), Sender::User, timestamp.clone());
        self.in_flight.insert(
            request_id,
            InFlight {
                timestamp,
                settled_tx,
            },
        );
        let in_flight = self.in_flight.len();
        self.view_tx.send_modify(|view| {
            view.transcript.push(entry);
            view.pending = true;
            view.in_flight = in_flight;
        });

        let transport = self.transport.clone();
        let guard = SettleGuard {
            request_id,
            settle_tx: Some(self.settle_tx.clone()),
        };
        tokio::spawn(
            async move {
                let settlement =
                    match transport.send(MessageRequest::new(text)).await {
                        Ok(reply) => Settlement::Replied(reply),
                        // Already logged by the transport client, and every
                        // kind of failure looks the same in the transcript.
                        Err(_) => Settlement::Failed,
                    };
                guard.settle(settlement);
            }
            .instrument(debug_span!("submission", request_id)),
        );
    }

    fn settle(&mut self, settled: Settled) {
        let Settled {
            request_id,
            settlement,
        } = settled;
        let Some(InFlight {
            timestamp,
            settled_tx,
        }) = self.in_flight.remove(&request_id)
        else {
            warn!("request {request_id} settled twice, ignoring");
            return;
        };

        let (text, outcome) = match settlement {
            Settlement::Replied(reply) => (
                reply
                    .non_empty_message()
                    .unwrap_or(NO_RESPONSE_TEXT)
                    .to_owned(),
                Outcome::Fulfilled,
            ),
            Settlement::Failed => (FALLBACK_TEXT.to_owned(), Outcome::Failed),
        };
        debug!("request {request_id} settled: {outcome:?}");

        let entry = TranscriptEntry::new(text, Sender::Bot, timestamp);
        let in_flight = self.in_flight.len();
        self.view_tx.send_modify(|view| {
            view.transcript.push(entry);
            view.pending = false;
            view.in_flight = in_flight;
        });

        // The submitter may not be waiting at all.
        settled_tx.send(outcome).ok();
    }
}

/// Reports the end of a request to the engine, no matter how the task
/// carrying it ends.
///
/// If the task unwinds or gets dropped before [`SettleGuard::settle`] is
/// called, the request is reported as failed, so the transcript gets its
/// fallback entry and the pending flag is cleared.
struct SettleGuard {
    request_id: u64,
    settle_tx: Option<mpsc::UnboundedSender<Settled>>,
}

impl SettleGuard {
    fn settle(mut self, settlement: Settlement) {
        if let Some(settle_tx) = self.settle_tx.take() {
            settle_tx
                .send(Settled {
                    request_id: self.request_id,
                    settlement,
                })
                .ok();
        }
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        if let Some(settle_tx) = self.settle_tx.take() {
            warn!("request {} ended without a result", self.request_id);
            settle_tx
                .send(Settled {
                    request_id: self.request_id,
                    settlement: Settlement::Failed,
                })
                .ok();
        }
    }
}

pub(super) async fn run_engine(
    mut state: EngineState,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
    mut settle_rx: mpsc::UnboundedReceiver<Settled>,
) {
    debug!("started");
    let mut handles_dropped = false;
    loop {
        select! {
            command = command_rx.recv(), if !handles_dropped => match command {
                Some(command) => {
                    trace!("received command: {command:?}");
                    state.handle_command(command);
                }
                None => handles_dropped = true,
            },
            // `state` keeps a sender alive, so this never yields `None`.
            Some(settled) = settle_rx.recv() => {
                trace!("received settlement: {settled:?}");
                state.settle(settled);
            }
        }

        // Without handles nobody can submit anymore, so stay around only
        // until the outstanding requests have been written down.
        if handles_dropped && state.in_flight.is_empty() {
            break;
        }
    }
    debug!("will terminate");
}
