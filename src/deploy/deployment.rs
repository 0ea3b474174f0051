// ABOUTME: End-to-end deployment trigger: send, classify, decode the created deployment.
// ABOUTME: The single entry point the CLI drives.

use tracing::{info, warn};
use url::Url;

use super::classify::classify;
use super::error::SendError;
use super::outcome::Outcome;
use super::request::DeploymentRequest;
use super::response::DeploymentResponse;
use super::send::send;
use crate::transport::Transport;

/// Classified result of one deployment request.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentResult {
    pub outcome: Outcome,
    /// Decoded 201 body. `None` for every other outcome, or when the
    /// success body could not be decoded.
    pub deployment: Option<DeploymentResponse>,
}

/// Send `request` and classify whatever comes back.
///
/// Only pre-flight validation and transport failures are errors; every HTTP
/// response becomes an [`Outcome`].
pub async fn create_deployment<T>(
    request: DeploymentRequest,
    transport: &T,
    endpoint: &Url,
    credential: &str,
) -> Result<DeploymentResult, SendError>
where
    T: Transport + ?Sized,
{
    let response = send(request, transport, endpoint, credential).await?;
    let outcome = classify(response.status, &response.body);
    info!(
        status = response.status,
        outcome = %outcome.kind(),
        signal = outcome.signal(),
        "deployment request classified"
    );

    let deployment = if outcome.is_success() {
        match DeploymentResponse::parse(&response.body) {
            Ok(created) => Some(created),
            Err(e) => {
                warn!(
                    error = %e,
                    body = %String::from_utf8_lossy(&response.body),
                    "cannot decode created deployment"
                );
                None
            }
        }
    } else {
        None
    };

    Ok(DeploymentResult {
        outcome,
        deployment,
    })
}
