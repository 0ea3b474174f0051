// ABOUTME: Wire types returned by the deployments endpoint.
// ABOUTME: Created-deployment body on success, {message} body on error paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{"message": "..."}` body carried by 202 and 419 responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Body of a 201 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentResponse {
    pub id: u64,
    pub url: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub task: String,
    /// Arbitrary JSON; GitHub echoes back whatever was submitted.
    #[serde(default)]
    pub payload: serde_json::Value,
    pub environment: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub statuses_url: String,
    pub creator: Creator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: u64,
    pub login: String,
    pub site_admin: bool,
}

impl DeploymentResponse {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
