use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The kind of error that occurred while exchanging a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request never got a response (connection refused, timed out, etc).
    Network,
    /// The backend answered with a non-successful status code.
    Status,
    /// The response body could not be decoded.
    MalformedBody,
    /// Any other errors.
    Other,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "Network error"),
            ErrorKind::Status => write!(f, "Unexpected status"),
            ErrorKind::MalformedBody => write!(f, "Malformed body"),
            ErrorKind::Other => write!(f, "Other error"),
        }
    }
}
