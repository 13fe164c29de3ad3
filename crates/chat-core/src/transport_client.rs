use std::pin::Pin;
use std::sync::Arc;

use orion_chat_transport::{
    MessageReply, MessageRequest, Transport, TransportError,
};
use tracing::Instrument;

type SendResult = Result<MessageReply, Box<dyn TransportError>>;
type BoxedSendFuture = Pin<Box<dyn Future<Output = SendResult> + Send>>;
type HandlerFn = Arc<dyn Fn(MessageRequest) -> BoxedSendFuture + Send + Sync>;

/// A wrapper around a transport that erases its type, so the engine
/// doesn't need a generic parameter for it.
#[derive(Clone)]
pub(crate) struct TransportClient {
    handler_fn: HandlerFn,
}

impl TransportClient {
    #[inline]
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = transport.send(&req);
            Box::pin(
                async move {
                    trace!("sending a message: {:?}", req);
                    match fut.await {
                        Ok(reply) => {
                            trace!("got a reply: {reply:?}");
                            Ok(reply)
                        }
                        Err(err) => {
                            error!("got an error ({}): {err}", err.kind());
                            Err(Box::new(err) as Box<dyn TransportError>)
                        }
                    }
                }
                .instrument(trace_span!("transport req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a message and waits for the reply.
    #[inline]
    pub async fn send(&self, req: MessageRequest) -> SendResult {
        (self.handler_fn)(req).await
    }
}

#[cfg(test)]
mod tests {
    use orion_chat_test_transport::{PresetReply, TestTransport};
    use orion_chat_transport::ErrorKind;

    use super::*;

    #[tokio::test]
    async fn test_send() {
        let mut transport = TestTransport::default();
        transport.add_reply("Hi", PresetReply::with_message("How are you?"));

        let client = TransportClient::new(transport);
        for _ in 0..3 {
            let reply = client.send(MessageRequest::new("Hi")).await.unwrap();
            assert_eq!(reply.non_empty_message(), Some("How are you?"));
        }
    }

    #[tokio::test]
    async fn test_error_handling() {
        let mut transport = TestTransport::default();
        transport.add_reply("Hi", PresetReply::with_failure(ErrorKind::Network));

        let client = TransportClient::new(transport);
        let err = client.send(MessageRequest::new("Hi")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
