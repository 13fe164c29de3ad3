//! Core logic of the chat client: the conversation engine that exchanges
//! messages with the assistant, and the normalizer that repairs the
//! Markdown it sends back.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod conversation;
mod error;
pub mod normalize;
mod timestamp;
pub mod transcript;
mod transport_client;

pub use conversation::{
    Conversation, ConversationBuilder, ConversationView, FALLBACK_TEXT,
    NO_RESPONSE_TEXT, Outcome, Submission,
};
pub use error::{Error, ErrorKind};
pub use normalize::normalize;
pub use timestamp::format_timestamp;
pub use transcript::{Sender, Transcript, TranscriptEntry};
