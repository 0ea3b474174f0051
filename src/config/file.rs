// ABOUTME: Optional ghdeploy.yml with repository defaults.
// ABOUTME: Discovery, YAML parsing, and per-environment profile merging.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::env_value::EnvValue;
use crate::error::{Error, Result};

pub const CONFIG_FILENAME: &str = "ghdeploy.yml";
pub const CONFIG_FILENAME_ALT: &str = "ghdeploy.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".ghdeploy/config.yml";

/// Defaults read from YAML. Every field is optional; CLI flags and
/// environment variables win over anything set here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub token: Option<EnvValue>,

    #[serde(default)]
    pub task: Option<String>,

    #[serde(default)]
    pub environment: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub auto_merge: Option<bool>,

    #[serde(default)]
    pub required_contexts: Option<Vec<String>>,

    #[serde(default)]
    pub payload: Option<serde_yaml::Value>,

    #[serde(default)]
    pub environments: HashMap<String, EnvironmentProfile>,
}

/// Overrides applied when the named environment is the deploy target.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentProfile {
    #[serde(default)]
    pub task: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub auto_merge: Option<bool>,

    #[serde(default)]
    pub required_contexts: Option<Vec<String>>,

    #[serde(default)]
    pub payload: Option<serde_yaml::Value>,
}

impl ConfigFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// First config file found in `dir`, if any.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading config file");
                return Self::load(path).map(Some);
            }
        }

        Ok(None)
    }

    /// Copy of this file with the profile for `environment` layered on top.
    /// Unknown environments leave the base values untouched.
    pub fn for_environment(&self, environment: &str) -> ConfigFile {
        let mut merged = self.clone();

        let Some(profile) = self.environments.get(environment) else {
            return merged;
        };

        if profile.task.is_some() {
            merged.task = profile.task.clone();
        }
        if profile.description.is_some() {
            merged.description = profile.description.clone();
        }
        if profile.auto_merge.is_some() {
            merged.auto_merge = profile.auto_merge;
        }
        if profile.required_contexts.is_some() {
            merged.required_contexts = profile.required_contexts.clone();
        }
        if profile.payload.is_some() {
            merged.payload = profile.payload.clone();
        }

        merged
    }

    /// Payload as the JSON string the API expects.
    ///
    /// A YAML string is taken as already-encoded JSON; anything else is
    /// re-encoded.
    pub fn payload_json(&self) -> Result<Option<String>> {
        match &self.payload {
            None | Some(serde_yaml::Value::Null) => Ok(None),
            Some(serde_yaml::Value::String(s)) => Ok(Some(s.clone())),
            Some(value) => serde_json::to_string(value)
                .map(Some)
                .map_err(|e| Error::InvalidConfig(format!("payload: {e}"))),
        }
    }
}
