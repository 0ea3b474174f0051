// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

use crate::deploy::{DeploymentResponse, DeploymentResult, OutcomeKind};

pub const SUCCESS_MESSAGE: &str = "Deployment successful.";

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// One JSON object per event, for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration_secs(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Render a classified result. Success goes to stdout, everything else
    /// to stderr (JSON mode always uses stdout).
    pub fn result(&self, result: &DeploymentResult) {
        let outcome = &result.outcome;
        match self.mode {
            OutputMode::Json => {
                let event = OutcomeEvent {
                    event: "outcome",
                    outcome: outcome.kind(),
                    signal: outcome.signal(),
                    message: outcome.message(),
                    deployment: result.deployment.as_ref(),
                    duration_secs: self.duration_secs(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    println!("{json}");
                }
            }
            OutputMode::Normal if outcome.is_success() => {
                println!("{SUCCESS_MESSAGE}");
                if let Some(created) = &result.deployment {
                    println!("{} ({:.1}s)", summary(created), self.elapsed_secs());
                }
            }
            OutputMode::Quiet if outcome.is_success() => {
                println!("{SUCCESS_MESSAGE}");
            }
            OutputMode::Normal | OutputMode::Quiet => {
                if let Some(message) = outcome.message() {
                    eprintln!("{message}");
                }
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = ErrorEvent {
                    event: "error",
                    message,
                    duration_secs: self.duration_secs(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

fn summary(created: &DeploymentResponse) -> String {
    format!(
        "  Deployment {} of {} ({}) to {} by {}",
        created.id,
        created.git_ref,
        short_sha(&created.sha),
        created.environment,
        created.creator.login
    )
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

#[derive(Serialize)]
struct OutcomeEvent<'a> {
    event: &'a str,
    outcome: OutcomeKind,
    signal: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deployment: Option<&'a DeploymentResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[derive(Serialize)]
struct ErrorEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
