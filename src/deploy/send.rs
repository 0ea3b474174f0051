// ABOUTME: Submits a DeploymentRequest through a Transport.
// ABOUTME: Validates the ref before any I/O, then performs exactly one POST.

use tracing::debug;
use url::Url;

use super::error::SendError;
use super::request::DeploymentRequest;
use crate::transport::{PostRequest, RawResponse, Transport};

/// POST `request` to `endpoint`, authenticating with `Authorization: token <credential>`.
///
/// Returns the raw response whatever its status; classification is the
/// caller's next step.
pub async fn send<T>(
    request: DeploymentRequest,
    transport: &T,
    endpoint: &Url,
    credential: &str,
) -> Result<RawResponse, SendError>
where
    T: Transport + ?Sized,
{
    if request.git_ref().is_empty() {
        return Err(SendError::EmptyRef);
    }

    let body = request.to_json()?;
    debug!(
        endpoint = %endpoint,
        git_ref = request.git_ref(),
        environment = request.environment().unwrap_or("<server default>"),
        auto_merge = request.auto_merge(),
        "submitting deployment"
    );

    let post = PostRequest::json(endpoint.clone(), format!("token {credential}"), body);
    Ok(transport.post(post).await?)
}
