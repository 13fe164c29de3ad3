//! A transport that talks to the Orion backend over HTTP.
//!
//! The backend exposes two endpoints:
//!
//! - `POST /message` with `{"message": ...}`, answering `{"message": ...}`;
//! - `GET /thread`, answering `{"threadId": ...}` for a fresh conversation.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use mime::Mime;
use orion_chat_transport::{
    ErrorKind, MessageReply, MessageRequest, Transport, TransportError,
};
use reqwest::{Client, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;

pub use config::{HttpConfig, HttpConfigBuilder};
use proto::ThreadBody;

/// Error type for [`HttpTransport`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl TransportError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// A transport for the Orion HTTP backend.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<HttpConfig>,
}

impl HttpTransport {
    /// Creates a new `HttpTransport` with the given configuration.
    #[inline]
    pub fn new(config: HttpConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Asks the backend for a new conversation thread and returns its id.
    ///
    /// The conversation engine never calls this, it is meant for whatever
    /// sets up the session before a conversation starts.
    pub async fn create_thread(&self) -> Result<String, Error> {
        let req = self
            .with_timeout(self.client.get(self.config.thread_url()))
            .header(header::ACCEPT, "application/json");
        let body: ThreadBody = fetch_json(req).await?;
        body.thread_id.filter(|id| !id.is_empty()).ok_or_else(|| {
            Error::new("response has no thread id", ErrorKind::MalformedBody)
        })
    }

    #[inline]
    fn with_timeout(&self, req: RequestBuilder) -> RequestBuilder {
        match self.config.timeout {
            Some(timeout) => req.timeout(timeout),
            None => req,
        }
    }
}

impl Transport for HttpTransport {
    type Error = Error;

    fn send(
        &self,
        req: &MessageRequest,
    ) -> impl Future<Output = Result<MessageReply, Self::Error>> + Send + 'static
    {
        let http_req = self
            .with_timeout(self.client.post(self.config.message_url()))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(req);

        async move {
            let reply: MessageReply = fetch_json(http_req).await?;
            trace!("got a reply: {reply:?}");
            Ok::<_, Error>(reply)
        }
    }
}

async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, Error> {
    let resp = req
        .send()
        .await
        .map_err(|err| Error::new(format!("{err}"), ErrorKind::Network))?;
    let resp = resp
        .error_for_status()
        .map_err(|err| Error::new(format!("{err}"), ErrorKind::Status))?;

    if !is_json_content_type(&resp) {
        // The browser client never looked at the header either, so this
        // is only worth a warning. The body decides.
        warn!(
            "unexpected content type: {:?}",
            resp.headers().get(header::CONTENT_TYPE)
        );
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|err| Error::new(format!("{err}"), ErrorKind::Network))?;
    serde_json::from_slice(&bytes).map_err(|err| {
        error!("failed to decode the body: {err}");
        Error::new(format!("{err}"), ErrorKind::MalformedBody)
    })
}

fn is_json_content_type(resp: &Response) -> bool {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .map(|m: Mime| {
            m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON)
        })
        .unwrap_or(false)
}
