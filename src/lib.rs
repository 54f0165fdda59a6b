//! # starlink-client
//!
//! A typed async client for the gRPC API exposed by Starlink dishes and
//! routers.
//!
//! Every operation travels through a single `Handle` RPC: the request is an
//! envelope carrying one payload variant and the reply is an envelope
//! carrying the matching response variant. This library hides the envelope
//! behind typed methods grouped by capability.
//!
//! ## Features
//!
//! - Async/await based API using Tokio
//! - Lazy connection with optional automatic reconnect
//! - Reply variants checked against each operation
//! - Classified errors with stable codes
//! - Retry and timeout helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use starlink_client::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), starlink_client::Error> {
//!     // The dish listens on 192.168.100.1:9200 by default
//!     let client = Client::new(ClientConfig::default());
//!     client.wait_for_ready(Some(Duration::from_secs(5))).await?;
//!
//!     let info = client.device().get_info().await?;
//!     if let Some(info) = info.device_info {
//!         println!("Connected to: {} ({})", info.id, info.software_version);
//!     }
//!
//!     let status = client.dish().get_status().await?;
//!     println!("Uptime: {}s", status.uptime_s);
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`protocol`] - Envelope messages, payload tags and the operation table
//! - [`types`] - Request and response payloads (device, dish, wifi, transceiver)
//! - [`transport`] - Connection binding plus gRPC and in-memory transports
//! - [`dispatch`] - Sends one operation and validates its reply
//! - [`services`] - Capability façades over the dispatcher
//! - [`retry`] - Backoff and timeout helpers
//! - [`client`] - High-level [`Client`]

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod retry;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::Client;
pub use config::{ClientConfig, ClientOptions, Credentials};
pub use dispatch::Dispatcher;
pub use error::{Error, ErrorKind, Result};
pub use protocol::{Operation, RequestTag, ResponseTag, ops};
pub use retry::{RetryPolicy, retry_with_backoff, with_timeout};
pub use services::{DeviceService, DishService, TransceiverService, WifiService};
pub use transport::{Binding, GrpcTransport, MemoryTransport, Transport};
pub use types::{
    DeviceInfo, DeviceStatus, DishConfig, DishGetStatusResponse, TransceiverGetStatusResponse,
    WifiConfig, WifiGetStatusResponse,
};
