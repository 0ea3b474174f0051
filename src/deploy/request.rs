// ABOUTME: Deployment submission payload and its builder.
// ABOUTME: Serializes to the deployments API body, omitting unset optional fields.

use serde::{Deserialize, Serialize};

/// Body POSTed to the deployments endpoint.
///
/// Fields are fixed once built. Unset optional fields are left out of the
/// serialized body so the server applies its own defaults (`task` = "deploy",
/// `environment` = "production"). `required_contexts` distinguishes omission
/// (verify all contexts) from an empty list (verify none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    #[serde(rename = "ref")]
    git_ref: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    task: Option<String>,

    #[serde(default = "default_auto_merge")]
    auto_merge: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    required_contexts: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    environment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

fn default_auto_merge() -> bool {
    true
}

impl DeploymentRequest {
    /// Request for `git_ref` with every optional field unset and auto-merge on.
    pub fn new(git_ref: impl Into<String>) -> Self {
        Self::builder(git_ref).build()
    }

    pub fn builder(git_ref: impl Into<String>) -> DeploymentRequestBuilder {
        DeploymentRequestBuilder {
            inner: DeploymentRequest {
                git_ref: git_ref.into(),
                task: None,
                auto_merge: default_auto_merge(),
                required_contexts: None,
                payload: None,
                environment: None,
                description: None,
            },
        }
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    pub fn auto_merge(&self) -> bool {
        self.auto_merge
    }

    pub fn required_contexts(&self) -> Option<&[String]> {
        self.required_contexts.as_deref()
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Serialized request body.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Builder for [`DeploymentRequest`]. Empty strings count as unset.
#[derive(Debug, Clone)]
#[must_use]
pub struct DeploymentRequestBuilder {
    inner: DeploymentRequest,
}

impl DeploymentRequestBuilder {
    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.inner.task = non_empty(task.into());
        self
    }

    pub fn auto_merge(mut self, auto_merge: bool) -> Self {
        self.inner.auto_merge = auto_merge;
        self
    }

    /// Contexts to verify. An empty list skips status checks entirely.
    pub fn required_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.required_contexts = Some(contexts.into_iter().map(Into::into).collect());
        self
    }

    /// JSON-encoded extra data, sent as a string.
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.inner.payload = non_empty(payload.into());
        self
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.inner.environment = non_empty(environment.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = non_empty(description.into());
        self
    }

    pub fn build(self) -> DeploymentRequest {
        self.inner
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
