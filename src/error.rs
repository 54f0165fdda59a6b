//! Error types for the starlink client.
//!
//! Every failure surfaced by the client is an [`Error`]: a human-readable
//! message, an [`ErrorKind`] and an optional map of structured details.
//! Transport failures are classified on the way in so callers never see a
//! raw `tonic` error.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::protocol::ResponseTag;

/// Classification of a client failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The device could not be reached.
    ConnectionFailure,
    /// The call or readiness wait ran out of time.
    Timeout,
    /// The device rejected our credentials.
    AuthenticationFailure,
    /// The device reported an error status.
    DeviceFault { status_code: Option<i32> },
    /// The request was malformed or rejected as invalid.
    ValidationFailure,
    /// The device does not implement the operation.
    NotSupported,
    /// The response envelope did not carry what the operation expects.
    ProtocolMismatch {
        expected: &'static [ResponseTag],
        actual: Option<ResponseTag>,
    },
    /// Anything not recognized above.
    Unclassified,
}

impl ErrorKind {
    /// Returns the stable string code for this kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConnectionFailure => "CONNECTION_ERROR",
            Self::Timeout => "TIMEOUT_ERROR",
            Self::AuthenticationFailure => "AUTHENTICATION_ERROR",
            Self::DeviceFault { .. } => "DEVICE_ERROR",
            Self::ValidationFailure => "VALIDATION_ERROR",
            Self::NotSupported => "NOT_SUPPORTED_ERROR",
            Self::ProtocolMismatch { .. } => "PROTOCOL_MISMATCH",
            Self::Unclassified => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The main error type for client operations.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    details: BTreeMap<String, String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: BTreeMap::new(),
            source: None,
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConnectionFailure, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthenticationFailure, message)
    }

    /// Creates a device fault, recording the status code in the details.
    pub fn device(message: impl Into<String>, status_code: Option<i32>) -> Self {
        let error = Self::new(ErrorKind::DeviceFault { status_code }, message);
        match status_code {
            Some(code) => error.with_detail("status_code", code.to_string()),
            None => error,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationFailure, message)
    }

    pub fn not_supported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotSupported, message)
    }

    /// Creates the error returned when a response carries the wrong payload.
    #[must_use]
    pub fn protocol_mismatch(
        expected: &'static [ResponseTag],
        actual: Option<ResponseTag>,
    ) -> Self {
        let expected_names = expected
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        let actual_name = actual.map_or("<empty>", |tag| tag.as_str());
        let message =
            format!("unexpected response type: expected {expected_names}, got {actual_name}");

        Self::new(ErrorKind::ProtocolMismatch { expected, actual }, message)
            .with_detail("expected", expected_names)
            .with_detail("actual", actual_name)
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unclassified, message)
    }

    /// Classifies a free-form failure message by the markers it contains.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let has = |upper: &str, lower: &str| message.contains(upper) || message.contains(lower);

        if has("UNAVAILABLE", "unavailable") {
            Self::connection(format!("failed to connect to device: {message}"))
        } else if has("DEADLINE_EXCEEDED", "deadline") || has("Timeout", "timeout") {
            Self::timeout(format!("request timed out: {message}"))
        } else if has("UNAUTHENTICATED", "unauthenticated") {
            Self::authentication(format!("authentication failed: {message}"))
        } else if has("INVALID_ARGUMENT", "invalid") {
            Self::validation(format!("invalid request: {message}"))
        } else {
            Self::unclassified(message)
        }
    }

    /// Adds a structured detail.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the stable string code of this error's kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn details(&self) -> &BTreeMap<String, String> {
        &self.details
    }

    /// Looks up a single detail by key.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }

    /// Returns the device status code for device faults.
    #[must_use]
    pub const fn status_code(&self) -> Option<i32> {
        match self.kind {
            ErrorKind::DeviceFault { status_code } => status_code,
            _ => None,
        }
    }

    /// Returns true for protocol mismatches.
    #[must_use]
    pub const fn is_protocol_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::ProtocolMismatch { .. })
    }
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        use tonic::Code;

        let message = status.message().to_owned();
        let error = match status.code() {
            Code::Unavailable => {
                Self::connection(format!("failed to connect to device: {message}"))
            }
            Code::DeadlineExceeded => Self::timeout(format!("request timed out: {message}")),
            Code::Unauthenticated | Code::PermissionDenied => {
                Self::authentication(format!("authentication failed: {message}"))
            }
            Code::InvalidArgument => Self::validation(format!("invalid request: {message}")),
            Code::Unimplemented => {
                Self::not_supported(format!("operation not supported: {message}"))
            }
            // tonic reports an expired `Endpoint::timeout` as a cancellation.
            Code::Cancelled if is_timeout(&status) => {
                Self::timeout(format!("request timed out: {message}"))
            }
            _ => Self::classify(message),
        };
        error
            .with_detail("grpc_code", format!("{:?}", status.code()))
            .with_source(status)
    }
}

/// Returns true if a status or anything in its source chain reports an
/// elapsed timer.
fn is_timeout(status: &tonic::Status) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(status);
    while let Some(error) = source {
        let text = error.to_string().to_ascii_lowercase();
        if text.contains("timeout") || text.contains("timed out") || text.contains("elapsed") {
            return true;
        }
        source = error.source();
    }
    false
}

impl From<tonic::transport::Error> for Error {
    fn from(error: tonic::transport::Error) -> Self {
        Self::connection(format!("transport error: {error}")).with_source(error)
    }
}

impl From<prost::DecodeError> for Error {
    fn from(error: prost::DecodeError) -> Self {
        Self::validation(format!("malformed envelope: {error}")).with_source(error)
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
