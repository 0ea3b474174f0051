// ABOUTME: Capability trait for performing one HTTP POST.
// ABOUTME: Lets the deployment core run against reqwest or an in-memory fake.

mod error;
mod http;

pub use error::{TransportError, TransportErrorKind};
pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use url::Url;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Anything that can perform one POST and hand back status + body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform exactly one request. No retries.
    async fn post(&self, request: PostRequest) -> Result<RawResponse, TransportError>;
}

/// An outgoing POST.
#[derive(Clone)]
pub struct PostRequest {
    pub url: Url,
    /// Full `Authorization` header value.
    pub authorization: String,
    pub content_type: &'static str,
    pub body: Bytes,
}

impl PostRequest {
    pub fn json(url: Url, authorization: String, body: impl Into<Bytes>) -> Self {
        Self {
            url,
            authorization,
            content_type: CONTENT_TYPE_JSON,
            body: body.into(),
        }
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for PostRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostRequest")
            .field("url", &self.url.as_str())
            .field("authorization", &"<redacted>")
            .field("content_type", &self.content_type)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// Status code and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
