// ABOUTME: In-memory Transport that records requests and replays a canned reply.
// ABOUTME: Lets tests assert on outgoing requests without touching the network.

use async_trait::async_trait;
use ghdeploy::transport::{PostRequest, RawResponse, Transport, TransportError};
use parking_lot::Mutex;

pub enum Reply {
    Response(RawResponse),
    Refused,
}

pub struct FakeTransport {
    reply: Reply,
    requests: Mutex<Vec<PostRequest>>,
}

impl FakeTransport {
    pub fn responding(status: u16, body: &'static str) -> Self {
        Self {
            reply: Reply::Response(RawResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn refusing() -> Self {
        Self {
            reply: Reply::Refused,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<PostRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post(&self, request: PostRequest) -> Result<RawResponse, TransportError> {
        let url = request.url.to_string();
        self.requests.lock().push(request);
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Refused => Err(TransportError::Connect {
                url,
                message: "connection refused".to_string(),
            }),
        }
    }
}
