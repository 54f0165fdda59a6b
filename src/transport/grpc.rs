//! gRPC transport over a `tonic` channel.

use std::sync::Arc;

use futures::future::BoxFuture;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tokio::sync::OnceCell;
use tonic::transport::{Channel, Endpoint};

use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, ErrorKind, Result};
use crate::protocol::{HANDLE_PATH, Request, Response};
use crate::transport::Transport;

/// Channel handle of a [`GrpcTransport`].
///
/// Starts out as a lazy channel. Once [`Transport::ready`] has connected,
/// every clone switches to that connection.
#[derive(Debug, Clone)]
pub struct GrpcChannel {
    endpoint: Endpoint,
    lazy: Channel,
    connected: Arc<OnceCell<Channel>>,
}

impl GrpcChannel {
    fn current(&self) -> Channel {
        self.connected.get().unwrap_or(&self.lazy).clone()
    }

    /// Returns true once readiness has established the connection.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.initialized()
    }
}

/// Sends envelopes to the device's `Handle` method.
#[derive(Debug, Clone)]
pub struct GrpcTransport {
    config: Arc<ClientConfig>,
}

impl GrpcTransport {
    /// Creates a transport for the configured address and credentials.
    #[must_use]
    pub const fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.config.address
    }

    fn endpoint(&self) -> Result<Endpoint> {
        let endpoint = Endpoint::from_shared(self.config.uri())
            .map_err(|e| {
                Error::validation(format!("invalid device address: {}", self.config.address))
                    .with_detail("address", self.config.address.as_str())
                    .with_source(e)
            })?
            .connect_timeout(self.config.connection_timeout)
            .timeout(self.config.request_timeout);

        match &self.config.credentials {
            Credentials::Insecure => Ok(endpoint),
            Credentials::Tls(tls) => Ok(endpoint.tls_config(tls.clone())?),
        }
    }
}

/// Adds the device address to connection failures.
fn at_address(error: Error, address: &str) -> Error {
    if error.kind() == ErrorKind::ConnectionFailure {
        error.with_detail("address", address)
    } else {
        error
    }
}

impl Transport for GrpcTransport {
    type Channel = GrpcChannel;

    fn open(&self) -> Result<GrpcChannel> {
        let endpoint = self.endpoint()?;
        tracing::info!("opening channel to {}", self.config.address);

        // No I/O until the first request.
        let lazy = endpoint.connect_lazy();
        Ok(GrpcChannel {
            endpoint,
            lazy,
            connected: Arc::new(OnceCell::new()),
        })
    }

    fn ready(&self, channel: GrpcChannel) -> BoxFuture<'static, Result<()>> {
        let address = self.config.address.clone();
        Box::pin(async move {
            // A lazy channel reports ready before it has connected, so connect
            // here and keep the connection for later calls.
            channel
                .connected
                .get_or_try_init(|| channel.endpoint.connect())
                .await
                .map_err(|e| at_address(e.into(), &address))?;
            tracing::debug!("device at {} is reachable", address);
            Ok(())
        })
    }

    fn handle(
        &self,
        channel: GrpcChannel,
        request: Request,
    ) -> BoxFuture<'static, Result<Response>> {
        let address = self.config.address.clone();
        Box::pin(async move {
            let mut grpc = Grpc::new(channel.current());
            grpc.ready()
                .await
                .map_err(|e| at_address(e.into(), &address))?;

            let codec = ProstCodec::<Request, Response>::default();
            let response = grpc
                .unary(
                    tonic::Request::new(request),
                    PathAndQuery::from_static(HANDLE_PATH),
                    codec,
                )
                .await
                .map_err(|status| at_address(status.into(), &address))?;

            Ok(response.into_inner())
        })
    }

    fn shutdown(&self, channel: GrpcChannel) {
        tracing::info!("closing channel to {}", self.config.address);
        drop(channel);
    }
}
