// ABOUTME: Transport error types with SNAFU pattern.
// ABOUTME: Failures that happen before a complete HTTP response exists.

use snafu::Snafu;

/// The request never produced a status code and body.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TransportError {
    #[snafu(display("failed to build HTTP client: {message}"))]
    Client { message: String },

    #[snafu(display("invalid request to {url}: {message}"))]
    Request { url: String, message: String },

    #[snafu(display("request to {url} failed: {message}"))]
    Connect { url: String, message: String },

    #[snafu(display("request to {url} timed out"))]
    Timeout { url: String },

    #[snafu(display("failed to read response body from {url}: {message}"))]
    Body { url: String, message: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// HTTP client could not be constructed (TLS backend, etc).
    Client,
    /// Request could not be assembled, e.g. a header value with control characters.
    Request,
    /// DNS, refused connection, TLS handshake.
    Connect,
    /// The transport's own timeout fired.
    Timeout,
    /// Status line arrived but the body stream broke.
    Body,
}

impl TransportError {
    pub fn kind(&self) -> TransportErrorKind {
        match self {
            TransportError::Client { .. } => TransportErrorKind::Client,
            TransportError::Request { .. } => TransportErrorKind::Request,
            TransportError::Connect { .. } => TransportErrorKind::Connect,
            TransportError::Timeout { .. } => TransportErrorKind::Timeout,
            TransportError::Body { .. } => TransportErrorKind::Body,
        }
    }

    /// Target URL, when the failure is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            TransportError::Client { .. } => None,
            TransportError::Request { url, .. }
            | TransportError::Connect { url, .. }
            | TransportError::Timeout { url }
            | TransportError::Body { url, .. } => Some(url),
        }
    }
}
