//! The contract between the conversation engine and the assistant backend.
//!
//! The engine never talks to the network by itself. Instead it is handed
//! a [`Transport`], which takes the user's text and eventually yields the
//! assistant's reply. Keeping this boundary in its own crate lets the
//! engine, the HTTP implementation and the in-process fake used by tests
//! evolve independently.
//!
//! Types in this crate don't define any behavior, they only describe the
//! shapes that implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod reply;
mod request;
mod transport;

pub use error::*;
pub use reply::*;
pub use request::*;
pub use transport::*;
