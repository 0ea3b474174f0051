// ABOUTME: Deployment submission and response classification.
// ABOUTME: Exports the request model, send, classify, and the Outcome set.

mod classify;
mod deployment;
mod error;
mod outcome;
mod request;
mod response;
mod send;

pub use classify::classify;
pub use deployment::{DeploymentResult, create_deployment};
pub use error::SendError;
pub use outcome::{NOT_FOUND_MESSAGE, Outcome, OutcomeKind, UNAUTHORIZED_MESSAGE};
pub use request::{DeploymentRequest, DeploymentRequestBuilder};
pub use response::{Creator, DeploymentResponse, ErrorBody};
pub use send::send;
