//! Envelope dispatch.
//!
//! [`Dispatcher::call`] is the one place where an operation is turned into
//! an envelope, sent, and its answer checked and unwrapped. Every service
//! method is a thin call into it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::protocol::{Operation, Request};
use crate::transport::{Binding, Transport};

/// Sends operations over a shared binding.
pub struct Dispatcher<T: Transport> {
    config: Arc<ClientConfig>,
    binding: Binding<T>,
    next_id: AtomicU64,
}

impl<T: Transport> Dispatcher<T> {
    /// Creates a dispatcher. The channel is opened on first use.
    #[must_use]
    pub fn new(config: Arc<ClientConfig>, transport: T) -> Self {
        let binding = Binding::new(transport, config.auto_reconnect);
        Self {
            config,
            binding,
            next_id: AtomicU64::new(1),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Performs one operation.
    ///
    /// A missing input is replaced by the request's default value.
    ///
    /// # Errors
    ///
    /// Returns a device fault if the response carries an error status, a
    /// protocol mismatch if the response answers a different request or
    /// carries an unexpected payload, or whatever the transport reports.
    pub async fn call<Op: Operation>(&self, input: Option<Op::Input>) -> Result<Op::Output> {
        let input = input.unwrap_or_default();
        if self.config.debug {
            tracing::debug!("dispatching {}: {:?}", Op::LABEL, input);
        }

        let request = Request::new(self.next_id(), Op::wrap(input));
        let request_id = request.id;
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(
                "request {} envelope: {}",
                request_id,
                hex::encode(request.to_bytes())
            );
        }

        let response = self.binding.call(request).await?;
        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(
                "response {} envelope: {}",
                response.id,
                hex::encode(response.to_bytes())
            );
        }

        if let Some(status) = response.status.as_ref().filter(|status| status.code != 0) {
            return Err(Error::device(
                format!("device error: {}", status.message),
                Some(status.code),
            )
            .with_detail("operation", Op::LABEL));
        }

        // Devices that do not echo ids answer with zero.
        if response.id != 0 && response.id != request_id {
            return Err(Error::new(
                ErrorKind::ProtocolMismatch {
                    expected: Op::EXPECTED,
                    actual: response.tag(),
                },
                format!(
                    "response id {} does not match request id {request_id}",
                    response.id
                ),
            )
            .with_detail("request_id", request_id.to_string())
            .with_detail("response_id", response.id.to_string()));
        }

        Op::unwrap(response.response).map_err(|actual| {
            Error::protocol_mismatch(Op::EXPECTED, actual).with_detail("operation", Op::LABEL)
        })
    }
}
