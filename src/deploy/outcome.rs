// ABOUTME: Closed set of classified deployment results.
// ABOUTME: Each outcome carries a fixed exit signal and a message.

use serde::Serialize;
use std::fmt;

use crate::exit;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Is the OAuth token provided correct?";
pub const NOT_FOUND_MESSAGE: &str = "Resource not found. Did you type the correct owner/repo?";

/// Result of classifying one deployment response.
///
/// Variants with a payload hold the fully rendered message, so
/// [`Outcome::message`] never allocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 201: the deployment was created.
    Success,
    /// 202: the server merged the base branch into the ref first.
    RetryableConflict(String),
    /// 401.
    Unauthorized,
    /// 404.
    NotFound,
    /// 419: merge conflict that needs a human.
    VersionConflict(String),
    /// Anything else, including undecodable error bodies.
    Unexpected(String),
}

/// Payload-free discriminant of [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    RetryableConflict,
    Unauthorized,
    NotFound,
    VersionConflict,
    Unexpected,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 6] = [
        OutcomeKind::Success,
        OutcomeKind::RetryableConflict,
        OutcomeKind::Unauthorized,
        OutcomeKind::NotFound,
        OutcomeKind::VersionConflict,
        OutcomeKind::Unexpected,
    ];

    /// Exit signal for this kind of outcome.
    pub fn signal(self) -> i32 {
        match self {
            OutcomeKind::Success => exit::SUCCESS,
            OutcomeKind::RetryableConflict => exit::RETRYABLE_CONFLICT,
            OutcomeKind::Unauthorized => exit::UNAUTHORIZED,
            OutcomeKind::NotFound => exit::NOT_FOUND,
            OutcomeKind::VersionConflict => exit::VERSION_CONFLICT,
            OutcomeKind::Unexpected => exit::UNEXPECTED,
        }
    }

    /// Stable snake_case name, used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeKind::Success => "success",
            OutcomeKind::RetryableConflict => "retryable_conflict",
            OutcomeKind::Unauthorized => "unauthorized",
            OutcomeKind::NotFound => "not_found",
            OutcomeKind::VersionConflict => "version_conflict",
            OutcomeKind::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success => OutcomeKind::Success,
            Outcome::RetryableConflict(_) => OutcomeKind::RetryableConflict,
            Outcome::Unauthorized => OutcomeKind::Unauthorized,
            Outcome::NotFound => OutcomeKind::NotFound,
            Outcome::VersionConflict(_) => OutcomeKind::VersionConflict,
            Outcome::Unexpected(_) => OutcomeKind::Unexpected,
        }
    }

    /// Exit signal for the calling process.
    pub fn signal(&self) -> i32 {
        self.kind().signal()
    }

    /// Human-readable message. `None` only for [`Outcome::Success`].
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success => None,
            Outcome::Unauthorized => Some(UNAUTHORIZED_MESSAGE),
            Outcome::NotFound => Some(NOT_FOUND_MESSAGE),
            Outcome::RetryableConflict(msg)
            | Outcome::VersionConflict(msg)
            | Outcome::Unexpected(msg) => Some(msg),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}
