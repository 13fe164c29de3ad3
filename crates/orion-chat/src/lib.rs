//! A terminal client for chatting with Orion.
//!
//! The crate includes a CLI tool for using in the terminal. The rendering
//! and input helpers are exposed as a library so other hosts can print transcripts
//! the same way.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod prompt;
pub mod render;

/// Re-exports of [`orion_chat_core`] crate.
pub mod core {
    pub use orion_chat_core::*;
}

/// Re-exports of [`orion_chat_http_transport`] crate.
pub mod http {
    pub use orion_chat_http_transport::*;
}
