// ABOUTME: Input collection and validation for a deployment run.
// ABOUTME: Merges CLI/env settings with the optional config file, then validates.

mod env_value;
mod file;

pub use env_value::EnvValue;
pub use file::{
    CONFIG_FILENAME, CONFIG_FILENAME_ALT, CONFIG_FILENAME_DIR, ConfigFile, EnvironmentProfile,
};

use std::fmt;
use url::Url;

use crate::deploy::DeploymentRequest;
use crate::error::{Error, Result};
use crate::types::{RepoSlug, RepoSlugError};

/// Raw, unvalidated inputs. Environment-variable defaults (token, URL) are
/// resolved by whoever fills this in; nothing here reads the environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub git_ref: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    /// Explicit endpoint. Takes precedence over owner/repo.
    pub url: Option<String>,
    pub token: Option<String>,
    pub payload: Option<String>,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub task: Option<String>,
    pub auto_merge: Option<bool>,
    pub required_contexts: Option<Vec<String>>,
}

/// Inputs that passed validation and are ready to send.
#[derive(Clone)]
pub struct DeployConfig {
    pub endpoint: Url,
    pub token: String,
    pub request: DeploymentRequest,
}

impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .field("request", &self.request)
            .finish()
    }
}

impl Settings {
    /// Fill unset fields from `file`, using the profile for the selected
    /// environment when the file defines one.
    pub fn with_file(mut self, file: &ConfigFile) -> Result<Self> {
        self.environment = present(self.environment).or_else(|| file.environment.clone());
        let file = match self.environment.as_deref() {
            Some(env) => file.for_environment(env),
            None => file.clone(),
        };

        self.owner = present(self.owner).or(file.owner.clone());
        self.repo = present(self.repo).or(file.repo.clone());
        self.url = present(self.url).or(file.url.clone());
        self.task = present(self.task).or(file.task.clone());
        self.description = present(self.description).or(file.description.clone());
        self.auto_merge = self.auto_merge.or(file.auto_merge);
        self.required_contexts = self.required_contexts.or(file.required_contexts.clone());

        self.payload = match present(self.payload) {
            Some(payload) => Some(payload),
            None => file.payload_json()?,
        };

        // Only touch the environment for the token when nothing else supplied one.
        self.token = match present(self.token) {
            Some(token) => Some(token),
            None => file.token.as_ref().map(EnvValue::resolve).transpose()?,
        };

        Ok(self)
    }

    /// Validate in a fixed order (ref, endpoint, token, payload); the first
    /// failure is reported.
    pub fn validate(self) -> Result<DeployConfig> {
        let git_ref = present(self.git_ref).ok_or(Error::RefRequired)?;

        let endpoint = match present(self.url) {
            Some(url) => parse_endpoint(&url)?,
            None => {
                let owner = present(self.owner).unwrap_or_default();
                let repo = present(self.repo).unwrap_or_default();
                RepoSlug::new(&owner, &repo)
                    .and_then(|slug| slug.deployments_url())
                    .map_err(|e| match e {
                        RepoSlugError::Url(source) => Error::InvalidEndpoint {
                            url: format!("{owner}/{repo}"),
                            source,
                        },
                        RepoSlugError::EmptyOwner | RepoSlugError::EmptyRepo => {
                            Error::OwnerRepoRequired
                        }
                    })?
            }
        };

        let token = present(self.token).ok_or(Error::TokenRequired)?;

        let payload = present(self.payload);
        if let Some(ref payload) = payload {
            serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(payload)
                .map_err(|_| Error::InvalidPayload)?;
        }

        let mut builder = DeploymentRequest::builder(git_ref)
            .auto_merge(self.auto_merge.unwrap_or(false));
        if let Some(task) = self.task {
            builder = builder.task(task);
        }
        if let Some(contexts) = self.required_contexts {
            builder = builder.required_contexts(contexts);
        }
        if let Some(payload) = payload {
            builder = builder.payload(payload);
        }
        if let Some(environment) = self.environment {
            builder = builder.environment(environment);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }

        Ok(DeployConfig {
            endpoint,
            token,
            request: builder.build(),
        })
    }
}

fn parse_endpoint(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| Error::InvalidEndpoint {
        url: url.to_string(),
        source,
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Settings {
        Settings {
            git_ref: Some("myref".to_string()),
            owner: Some("myowner".to_string()),
            repo: Some("myrepo".to_string()),
            token: Some("mytoken".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn explicit_url_skips_owner_repo() {
        let settings = Settings {
            owner: None,
            repo: None,
            url: Some("https://ghe.example.com/api/v3/repos/o/r/deployments".to_string()),
            ..valid()
        };
        let config = settings.validate().unwrap();
        assert_eq!(config.endpoint.host_str(), Some("ghe.example.com"));
    }

    #[test]
    fn relative_url_is_rejected() {
        let settings = Settings {
            url: Some("/repos/o/r/deployments".to_string()),
            ..valid()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { .. }));
        assert_eq!(err.exit_code(), crate::exit::INVALID_ARGS);
    }

    #[test]
    fn auto_merge_defaults_off() {
        let config = valid().validate().unwrap();
        assert!(!config.request.auto_merge());
    }

    #[test]
    fn debug_hides_token() {
        let config = valid().validate().unwrap();
        assert!(!format!("{config:?}").contains("mytoken"));
    }
}
