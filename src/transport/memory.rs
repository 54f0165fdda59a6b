//! In-process transport.
//!
//! Answers envelopes with a handler closure instead of a device. Requests
//! and responses are still encoded and decoded, so anything that would not
//! survive the wire fails here as well.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use futures::future::BoxFuture;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::protocol::{Request, Response, response};
use crate::transport::Transport;

type Handler = dyn Fn(&Request) -> Result<Response> + Send + Sync;

struct Inner {
    handler: Mutex<Arc<Handler>>,
    requests: Mutex<Vec<Request>>,
    opened: AtomicUsize,
}

/// Channel handle of a [`MemoryTransport`].
#[derive(Debug, Clone)]
pub struct MemoryChannel {
    id: usize,
    open: Arc<AtomicBool>,
}

impl MemoryChannel {
    /// Sequence number of this channel, starting at 1.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

/// Transport answering every request with a handler closure.
///
/// Clones share the handler and the request log.
#[derive(Clone)]
pub struct MemoryTransport {
    inner: Arc<Inner>,
}

impl MemoryTransport {
    /// Creates a transport answering with `handler`.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
    {
        let handler: Arc<Handler> = Arc::new(handler);
        Self {
            inner: Arc::new(Inner {
                handler: Mutex::new(handler),
                requests: Mutex::new(Vec::new()),
                opened: AtomicUsize::new(0),
            }),
        }
    }

    /// Creates a transport answering every request with `payload`,
    /// echoing the request id.
    #[must_use]
    pub fn replying(payload: response::Payload) -> Self {
        Self::new(reply_with(payload))
    }

    /// Replaces the handler.
    pub async fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
    {
        let handler: Arc<Handler> = Arc::new(handler);
        *self.inner.handler.lock().await = handler;
    }

    /// Replaces the handler with one answering `payload`.
    pub async fn set_reply(&self, payload: response::Payload) {
        self.set_handler(reply_with(payload)).await;
    }

    /// Returns every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.inner.requests.lock().await.clone()
    }

    /// Returns the number of channels opened so far.
    #[must_use]
    pub fn opened_channels(&self) -> usize {
        self.inner.opened.load(Ordering::SeqCst)
    }
}

fn reply_with(payload: response::Payload) -> impl Fn(&Request) -> Result<Response> + Send + Sync {
    move |request: &Request| Ok(Response::new(request.id, payload.clone()))
}

impl fmt::Debug for MemoryTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTransport")
            .field("opened", &self.opened_channels())
            .finish_non_exhaustive()
    }
}

impl Transport for MemoryTransport {
    type Channel = MemoryChannel;

    fn open(&self) -> Result<MemoryChannel> {
        let id = self.inner.opened.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("opened in-memory channel {}", id);
        Ok(MemoryChannel {
            id,
            open: Arc::new(AtomicBool::new(true)),
        })
    }

    fn ready(&self, channel: MemoryChannel) -> BoxFuture<'static, Result<()>> {
        Box::pin(async move {
            if channel.is_open() {
                Ok(())
            } else {
                Err(Error::connection("channel is shut down"))
            }
        })
    }

    fn handle(
        &self,
        channel: MemoryChannel,
        request: Request,
    ) -> BoxFuture<'static, Result<Response>> {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            if !channel.is_open() {
                return Err(Error::connection("channel is shut down"));
            }

            let request = Request::from_bytes(request.to_bytes())?;
            inner.requests.lock().await.push(request.clone());

            let handler = Arc::clone(&*inner.handler.lock().await);
            let response = handler(&request)?;
            Response::from_bytes(response.to_bytes())
        })
    }

    fn shutdown(&self, channel: MemoryChannel) {
        tracing::debug!("shut down in-memory channel {}", channel.id);
        channel.open.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::protocol::{RequestTag, ResponseTag, request};
    use crate::types::{GetDeviceInfoRequest, GetDeviceInfoResponse, RebootResponse};

    fn info_request(id: u64) -> Request {
        Request::new(id, request::Payload::GetDeviceInfo(GetDeviceInfoRequest {}))
    }

    #[tokio::test]
    async fn test_replying_echoes_request_id() {
        let transport = MemoryTransport::replying(response::Payload::GetDeviceInfo(
            GetDeviceInfoResponse::default(),
        ));
        let channel = transport.open().unwrap();

        let response = transport.handle(channel, info_request(42)).await.unwrap();
        assert_eq!(response.id, 42);
        assert_eq!(response.tag(), Some(ResponseTag::GetDeviceInfo));
    }

    #[tokio::test]
    async fn test_records_requests() {
        let transport = MemoryTransport::replying(response::Payload::Reboot(RebootResponse {}));
        let channel = transport.open().unwrap();

        transport.handle(channel.clone(), info_request(1)).await.unwrap();
        transport.handle(channel, info_request(2)).await.unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].id, 1);
        assert_eq!(requests[1].tag(), Some(RequestTag::GetDeviceInfo));
    }

    #[tokio::test]
    async fn test_handler_can_be_replaced() {
        let transport = MemoryTransport::replying(response::Payload::Reboot(RebootResponse {}));
        transport
            .set_handler(|_| Err(Error::not_supported("not here")))
            .await;

        let channel = transport.open().unwrap();
        let err = transport.handle(channel, info_request(1)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotSupported);
    }

    #[tokio::test]
    async fn test_shut_down_channel_rejects_calls() {
        let transport = MemoryTransport::replying(response::Payload::Reboot(RebootResponse {}));
        let channel = transport.open().unwrap();
        transport.shutdown(channel.clone());

        assert!(!channel.is_open());
        let err = transport.ready(channel.clone()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
        assert!(transport.handle(channel, info_request(1)).await.is_err());
        assert!(transport.requests().await.is_empty());
    }

    #[test]
    fn test_channels_are_numbered() {
        let transport = MemoryTransport::replying(response::Payload::Reboot(RebootResponse {}));
        assert_eq!(transport.open().unwrap().id(), 1);
        assert_eq!(transport.open().unwrap().id(), 2);
        assert_eq!(transport.opened_channels(), 2);
    }
}
