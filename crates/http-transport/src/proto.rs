//! Wire types that only the HTTP backend knows about.

use serde::Deserialize;

/// Response body of `GET /thread`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ThreadBody {
    #[serde(rename = "threadId", default)]
    pub thread_id: Option<String>,
}
