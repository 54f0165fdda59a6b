//! Envelope protocol definitions.
//!
//! This module contains the wire-level pieces of the client:
//! - Request/response envelopes and their payload tags
//! - Operation descriptors mapping each capability onto the envelope

pub mod envelope;
pub mod operation;

pub use envelope::{Request, RequestTag, Response, ResponseStatus, ResponseTag, request, response};
pub use operation::{Operation, ops};

/// Path of the single RPC method every envelope is sent through.
pub const HANDLE_PATH: &str = "/SpaceX.API.Device.Device/Handle";
