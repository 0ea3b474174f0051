// ABOUTME: Application-wide error types for ghdeploy.
// ABOUTME: Uses thiserror; every variant maps to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::deploy::SendError;
use crate::exit;
use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Ref is required")]
    RefRequired,

    #[error("Owner and repo must be provided")]
    OwnerRepoRequired,

    #[error("GitHub token is required")]
    TokenRequired,

    #[error("Invalid JSON in Payload")]
    InvalidPayload,

    #[error("invalid deployments URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Exit code for the calling process.
    ///
    /// Everything detected before the network is touched is `INVALID_ARGS`;
    /// a request that never got a response is `TRANSPORT_FAILURE`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Send(SendError::Transport(_)) | Error::Transport(_) => exit::TRANSPORT_FAILURE,
            _ => exit::INVALID_ARGS,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
