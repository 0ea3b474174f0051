// ABOUTME: reqwest-backed Transport used by the CLI.
// ABOUTME: One POST per call, no retries, transport-default timeouts.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::error::{
    BodySnafu, ClientSnafu, ConnectSnafu, RequestSnafu, TimeoutSnafu, TransportError,
};
use super::{PostRequest, RawResponse, Transport};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTPS transport over a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Client with a crate User-Agent (GitHub rejects requests without one).
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ClientSnafu {
                    message: e.to_string(),
                }
                .build()
            })?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: PostRequest) -> Result<RawResponse, TransportError> {
        let url = request.url.to_string();
        debug!(%url, body_len = request.body.len(), "POST");

        let response = self
            .client
            .post(request.url)
            .header(AUTHORIZATION, request.authorization)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await
            .map_err(|e| send_error(&url, e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            BodySnafu {
                url: url.as_str(),
                message: e.to_string(),
            }
            .build()
        })?;

        debug!(%url, status, body_len = body.len(), "response received");
        Ok(RawResponse { status, body })
    }
}

fn send_error(url: &str, err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        RequestSnafu {
            url,
            message: err.to_string(),
        }
        .build()
    } else if err.is_timeout() {
        TimeoutSnafu { url }.build()
    } else {
        ConnectSnafu {
            url,
            message: error_chain(&err),
        }
        .build()
    }
}

// reqwest's Display stops at the outermost layer ("error sending request");
// the useful part (DNS, refused, TLS) lives in the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("ghdeploy/"));
    }

    #[tokio::test]
    async fn refused_connection_is_connect_error() {
        // Grab a free port, then release it so nothing is listening.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let target = format!("http://127.0.0.1:{port}/deployments");

        let transport = HttpTransport::with_client(Client::builder().no_proxy().build().unwrap());
        let request = PostRequest::json(
            url::Url::parse(&target).unwrap(),
            "token t".to_string(),
            "{}",
        );
        let err = transport.post(request).await.unwrap_err();
        assert_eq!(err.kind(), super::super::TransportErrorKind::Connect);
        assert_eq!(err.url(), Some(target.as_str()));
    }
}
