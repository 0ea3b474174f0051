// ABOUTME: GitHub owner/repo pair and deployments endpoint derivation.
// ABOUTME: Path segments are percent-encoded when building the URL.

use std::fmt;
use thiserror::Error;
use url::Url;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Error)]
pub enum RepoSlugError {
    #[error("owner cannot be empty")]
    EmptyOwner,

    #[error("repo cannot be empty")]
    EmptyRepo,

    #[error("invalid deployments URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    pub fn new(owner: &str, repo: &str) -> Result<Self, RepoSlugError> {
        if owner.is_empty() {
            return Err(RepoSlugError::EmptyOwner);
        }
        if repo.is_empty() {
            return Err(RepoSlugError::EmptyRepo);
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// `https://api.github.com/repos/<owner>/<repo>/deployments`
    pub fn deployments_url(&self) -> Result<Url, RepoSlugError> {
        self.deployments_url_on(GITHUB_API_BASE)
    }

    /// Deployments URL against another API host (GitHub Enterprise).
    pub fn deployments_url_on(&self, api_base: &str) -> Result<Url, RepoSlugError> {
        let url = format!(
            "{}/repos/{}/{}/deployments",
            api_base.trim_end_matches('/'),
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repo)
        );
        Ok(Url::parse(&url)?)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
