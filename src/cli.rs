// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Flags mirror the deployment request fields plus output controls.

use clap::{ArgAction, Parser};
use ghdeploy::config::Settings;
use ghdeploy::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghdeploy")]
#[command(about = "Create a GitHub deployment and exit with a code describing the result")]
#[command(version)]
pub struct Cli {
    /// The ref to deploy (branch, tag, or SHA)
    #[arg(long = "ref", value_name = "REF")]
    pub git_ref: Option<String>,

    /// GitHub repo owner
    #[arg(long)]
    pub owner: Option<String>,

    /// GitHub repo name
    #[arg(long)]
    pub repo: Option<String>,

    /// GitHub OAuth token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Deployments endpoint; overrides owner/repo
    #[arg(long, env = "GITHUB_DEPLOYMENTS_URL")]
    pub url: Option<String>,

    /// A custom JSON encoded payload
    #[arg(long)]
    pub payload: Option<String>,

    /// Description of the deploy
    #[arg(long)]
    pub description: Option<String>,

    /// Environment of the deploy
    #[arg(long)]
    pub environment: Option<String>,

    /// Task to execute (server default: deploy)
    #[arg(long)]
    pub task: Option<String>,

    /// Merge the default branch into the requested ref if it's behind
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub merge: Option<bool>,

    /// Status context that must pass before deploying (repeatable)
    #[arg(long = "required-context", value_name = "CONTEXT", action = ArgAction::Append)]
    pub required_contexts: Vec<String>,

    /// Skip commit status checks entirely
    #[arg(long, conflicts_with = "required_contexts")]
    pub no_required_contexts: bool,

    /// Config file (default: ghdeploy.yml in the current directory, if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    pub fn settings(&self) -> Settings {
        let required_contexts = if self.no_required_contexts {
            Some(Vec::new())
        } else if self.required_contexts.is_empty() {
            None
        } else {
            Some(self.required_contexts.clone())
        };

        Settings {
            git_ref: self.git_ref.clone(),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            url: self.url.clone(),
            token: self.token.clone(),
            payload: self.payload.clone(),
            description: self.description.clone(),
            environment: self.environment.clone(),
            task: self.task.clone(),
            auto_merge: self.merge,
            required_contexts,
        }
    }
}
