use std::error::Error;

use crate::error::ErrorKind;
use crate::reply::MessageReply;
use crate::request::MessageRequest;

/// The error type for a transport.
pub trait TransportError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that carries user messages to the assistant backend and brings
/// the replies back.
///
/// Once the transport is created, it should behave like a stateless object.
/// It can still have internal state (a connection pool, for example), but
/// callers should not rely on it. Timeouts, if any, are the transport's own
/// business.
pub trait Transport: Send + Sync {
    /// The error type that may be returned by the transport.
    type Error: TransportError;

    /// Sends a message to the assistant.
    ///
    /// The returned future must not borrow from `self` or `req`, so that it
    /// can be moved into a separate task.
    fn send(
        &self,
        req: &MessageRequest,
    ) -> impl Future<Output = Result<MessageReply, Self::Error>> + Send + 'static;
}
