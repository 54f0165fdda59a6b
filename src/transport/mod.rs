//! Transport layer for envelope RPC.
//!
//! This module provides the abstraction over how envelopes reach the device:
//! - [`GrpcTransport`] sends them over a `tonic` channel
//! - [`MemoryTransport`] answers them in-process
//!
//! [`Binding`] owns the connection lifecycle on top of either.

pub mod binding;
pub mod grpc;
pub mod memory;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::protocol::{Request, Response};

/// Trait for transport implementations.
///
/// A transport hands out cheap, cloneable channel handles. Opening a channel
/// must not require network I/O; the connection is established on first use
/// or when [`ready`](Transport::ready) is awaited.
pub trait Transport: Send + Sync + 'static {
    /// Handle to an open channel.
    type Channel: Clone + Send + Sync + 'static;

    /// Opens a new channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel cannot be configured.
    fn open(&self) -> Result<Self::Channel>;

    /// Resolves once the channel can carry requests.
    fn ready(&self, channel: Self::Channel) -> BoxFuture<'static, Result<()>>;

    /// Sends one envelope and returns the device's answer.
    fn handle(
        &self,
        channel: Self::Channel,
        request: Request,
    ) -> BoxFuture<'static, Result<Response>>;

    /// Releases a channel. Never fails.
    fn shutdown(&self, channel: Self::Channel);
}

pub use binding::Binding;
pub use grpc::GrpcTransport;
pub use memory::MemoryTransport;
