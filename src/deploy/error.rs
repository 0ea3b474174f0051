// ABOUTME: Error types for submitting a deployment request.
// ABOUTME: Pre-flight validation and transport failures; never classified outcomes.

use crate::transport::TransportError;

/// Failures that prevent a response from reaching the classifier.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The request has no ref. Raised before any I/O.
    #[error("Ref is empty")]
    EmptyRef,

    /// The request body could not be encoded.
    #[error("failed to encode deployment request: {0}")]
    Encode(#[from] serde_json::Error),

    /// No HTTP response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
