//! Main [`Client`] implementation.
//!
//! This module provides the high-level [`Client`] that combines the
//! transport binding, the dispatcher and the four capability services into
//! a unified interface.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ClientConfig, ClientOptions};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::services::{DeviceService, DishService, TransceiverService, WifiService};
use crate::transport::{GrpcTransport, Transport};

/// Client for a Starlink dish or router.
///
/// The channel is opened on first use. All services share it, along with
/// the configuration and the request id counter.
pub struct Client<T: Transport = GrpcTransport> {
    config: Arc<ClientConfig>,
    dispatcher: Arc<Dispatcher<T>>,
    device: DeviceService<T>,
    dish: DishService<T>,
    wifi: WifiService<T>,
    transceiver: TransceiverService<T>,
}

impl Client<GrpcTransport> {
    /// Creates a gRPC client with the given configuration.
    ///
    /// No connection is made until the first request or
    /// [`wait_for_ready`](Self::wait_for_ready).
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let config = Arc::new(config);
        let transport = GrpcTransport::new(Arc::clone(&config));
        Self::from_parts(config, transport)
    }

    /// Creates a gRPC client from partial options; missing fields take
    /// their defaults.
    #[must_use]
    pub fn from_options(options: &ClientOptions) -> Self {
        Self::new(ClientConfig::normalize(options))
    }
}

impl Default for Client<GrpcTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self::from_parts(Arc::new(config), transport)
    }

    fn from_parts(config: Arc<ClientConfig>, transport: T) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&config), transport));
        Self {
            config,
            device: DeviceService::new(Arc::clone(&dispatcher)),
            dish: DishService::new(Arc::clone(&dispatcher)),
            wifi: WifiService::new(Arc::clone(&dispatcher)),
            transceiver: TransceiverService::new(Arc::clone(&dispatcher)),
            dispatcher,
        }
    }

    /// Identity, status, logs and network tools.
    #[must_use]
    pub const fn device(&self) -> &DeviceService<T> {
        &self.device
    }

    /// Dish positioning, obstruction and configuration.
    #[must_use]
    pub const fn dish(&self) -> &DishService<T> {
        &self.dish
    }

    /// Router management.
    #[must_use]
    pub const fn wifi(&self) -> &WifiService<T> {
        &self.wifi
    }

    /// RF transceiver diagnostics.
    #[must_use]
    pub const fn transceiver(&self) -> &TransceiverService<T> {
        &self.transceiver
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the dispatcher shared by the services.
    ///
    /// Useful for operations reached through [`ops`](crate::protocol::ops)
    /// directly.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// Returns true if the channel is open.
    pub async fn is_ready(&self) -> bool {
        self.dispatcher.binding().is_ready().await
    }

    /// Opens the channel if needed and waits until the device is reachable.
    ///
    /// # Errors
    ///
    /// Returns a timeout error if `timeout` elapses first, or a connection
    /// error if the device cannot be reached.
    pub async fn wait_for_ready(&self, timeout: Option<Duration>) -> Result<()> {
        self.dispatcher.binding().wait_for_ready(timeout).await
    }

    /// Closes the channel. Calling this more than once is harmless.
    ///
    /// With `auto_reconnect` set, the next request opens a new channel.
    pub async fn close(&self) {
        self.dispatcher.binding().close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::protocol::{RequestTag, ResponseTag, ops, response};
    use crate::transport::MemoryTransport;
    use crate::types::{
        DeviceInfo, DishGetStatusResponse, GetDeviceInfoResponse, WifiGetClientsResponse,
        WifiGetStatusResponse,
    };

    fn info_reply() -> response::Payload {
        response::Payload::GetDeviceInfo(GetDeviceInfoResponse {
            device_info: Some(DeviceInfo {
                id: "ut01000000-00000000-00abcdef".into(),
                hardware_version: "rev3_proto2".into(),
                software_version: "2024.05.0.mr12345".into(),
                ..DeviceInfo::default()
            }),
        })
    }

    fn memory_client(transport: &MemoryTransport) -> Client<MemoryTransport> {
        Client::with_transport(ClientConfig::default(), transport.clone())
    }

    #[tokio::test]
    async fn test_call_before_wait_for_ready() {
        let transport = MemoryTransport::replying(info_reply());
        let client = memory_client(&transport);
        assert!(!client.is_ready().await);

        let info = client.device().get_info().await.unwrap();
        let device_info = info.device_info.unwrap();
        assert_eq!(device_info.id, "ut01000000-00000000-00abcdef");
        assert_eq!(device_info.hardware_version, "rev3_proto2");
        assert!(client.is_ready().await);

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tag(), Some(RequestTag::GetDeviceInfo));
    }

    #[tokio::test]
    async fn test_status_mismatch_after_remock() {
        let transport = MemoryTransport::replying(response::Payload::DishGetStatus(
            DishGetStatusResponse {
                uptime_s: 120,
                ..DishGetStatusResponse::default()
            },
        ));
        let client = memory_client(&transport);

        let status = client.dish().get_status().await.unwrap();
        assert_eq!(status.uptime_s, 120);

        transport
            .set_reply(response::Payload::WifiGetStatus(WifiGetStatusResponse::default()))
            .await;
        let err = client.dish().get_status().await.unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::ProtocolMismatch {
                expected: &[ResponseTag::DishGetStatus],
                actual: Some(ResponseTag::WifiGetStatus),
            }
        );
        assert!(err.to_string().contains("wifiGetStatus"));

        // The router façade accepts the same reply.
        assert!(client.wifi().get_status().await.is_ok());
    }

    #[tokio::test]
    async fn test_wait_for_ready() {
        let transport = MemoryTransport::replying(info_reply());
        let client = memory_client(&transport);

        client
            .wait_for_ready(Some(Duration::from_secs(1)))
            .await
            .unwrap();
        assert!(client.is_ready().await);
        assert!(transport.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_clients_are_independent() {
        let transport = MemoryTransport::replying(info_reply());
        let first = memory_client(&transport);
        let second = memory_client(&transport);

        first.wait_for_ready(None).await.unwrap();
        assert!(first.is_ready().await);
        assert!(!second.is_ready().await);

        first.close().await;
        assert!(!first.is_ready().await);
        second.device().get_info().await.unwrap();
        assert!(second.is_ready().await);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let transport = MemoryTransport::replying(info_reply());
        let client = memory_client(&transport);

        client.close().await;
        client.device().get_info().await.unwrap();
        client.close().await;
        client.close().await;
        assert!(!client.is_ready().await);
    }

    #[tokio::test]
    async fn test_closed_client_without_reconnect() {
        let transport = MemoryTransport::replying(info_reply());
        let config = ClientConfig::default().auto_reconnect(false);
        let client = Client::with_transport(config, transport.clone());

        client.device().get_info().await.unwrap();
        client.close().await;

        let err = client.device().get_info().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
        assert_eq!(transport.requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_closed_client_reconnects() {
        let transport = MemoryTransport::replying(info_reply());
        let client = memory_client(&transport);

        client.device().get_info().await.unwrap();
        client.close().await;
        client.device().get_info().await.unwrap();

        assert_eq!(transport.opened_channels(), 2);
        assert!(client.is_ready().await);
    }

    #[tokio::test]
    async fn test_concurrent_first_use_across_services() {
        let transport = MemoryTransport::new(|request| {
            let payload = match request.tag() {
                Some(RequestTag::WifiGetClients) => {
                    response::Payload::WifiGetClients(WifiGetClientsResponse::default())
                }
                Some(RequestTag::GetStatus) => {
                    response::Payload::DishGetStatus(DishGetStatusResponse::default())
                }
                _ => info_reply(),
            };
            Ok(crate::protocol::Response::new(request.id, payload))
        });
        let client = memory_client(&transport);

        let (info, status, clients) = tokio::join!(
            client.device().get_info(),
            client.dish().get_status(),
            client.wifi().get_clients(),
        );
        assert!(info.is_ok());
        assert!(status.is_ok());
        assert!(clients.is_ok());
        assert_eq!(transport.opened_channels(), 1);

        let mut ids: Vec<_> = transport.requests().await.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_transport_status_is_classified() {
        let transport =
            MemoryTransport::new(|_| Err(Error::from(tonic::Status::unavailable("no route"))));
        let client = memory_client(&transport);

        let err = client.device().get_info().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
        assert_eq!(err.code(), "CONNECTION_ERROR");
    }

    #[tokio::test]
    async fn test_dispatcher_reaches_operations_directly() {
        let transport = MemoryTransport::replying(info_reply());
        let client = memory_client(&transport);

        let info = client
            .dispatcher()
            .call::<ops::GetDeviceInfo>(None)
            .await
            .unwrap();
        assert!(info.device_info.is_some());
    }

    #[test]
    fn test_from_options_uses_defaults() {
        let options = ClientOptions {
            request_timeout: Some(Duration::from_secs(5)),
            ..ClientOptions::default()
        };
        let client = Client::from_options(&options);
        assert_eq!(client.config().address, "192.168.100.1:9200");
        assert_eq!(client.config().request_timeout, Duration::from_secs(5));
        assert_eq!(client.config().max_retries, 3);
        assert_eq!(options.request_timeout, Some(Duration::from_secs(5)));
        assert!(options.address.is_none());
    }

    #[tokio::test]
    async fn test_grpc_client_is_lazy() {
        let client = Client::new(ClientConfig::new("127.0.0.1:1"));
        assert!(!client.is_ready().await);
        client.close().await;
        client.close().await;
    }

    #[tokio::test]
    async fn test_unreachable_device_is_not_ready() {
        let config = ClientConfig::new("127.0.0.1:1").connection_timeout(Duration::from_secs(1));
        let client = Client::new(config);

        assert!(client.device().get_info().await.is_err());
        assert!(client.is_ready().await);

        let err = client
            .wait_for_ready(Some(Duration::from_secs(2)))
            .await
            .unwrap_err();
        assert!(
            matches!(err.kind(), ErrorKind::ConnectionFailure | ErrorKind::Timeout),
            "{err}"
        );
        assert!(!client.is_ready().await);
    }
}
