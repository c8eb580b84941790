//! Grouping configuration and its discovery.

pub mod group;

use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

pub use group::{GroupRule, default_groups};

/// Environment variable naming a config file to use.
pub const CONFIG_ENV_VAR: &str = "RELEASE_BUCKETS_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".release-buckets.json";

/// Category rules and scope filters for commit grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Ordered groups; the first group matching a commit type wins.
    pub groups: Vec<GroupRule>,
    /// Scopes whose commits are dropped before classification.
    pub ignored_scopes: BTreeSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            ignored_scopes: BTreeSet::new(),
        }
    }
}

impl Config {
    pub fn new(groups: Vec<GroupRule>) -> Self {
        Self {
            groups,
            ignored_scopes: BTreeSet::new(),
        }
    }

    pub fn with_ignored_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// First configured group whose aliases contain `commit_type`.
    pub fn group_for(&self, commit_type: &str) -> Option<&GroupRule> {
        self.groups.iter().find(|g| g.matches(commit_type))
    }

    pub fn is_scope_ignored(&self, scope: &str) -> bool {
        self.ignored_scopes.contains(scope)
    }

    /// Parse a config from JSON text; `path` is only used in errors.
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content, path)?;
        debug!(
            path = %path.display(),
            groups = config.groups.len(),
            ignored_scopes = config.ignored_scopes.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Resolve the config to use from the working directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::discover_in(explicit, &cwd)
    }

    /// Resolve the config to use, looking for the default file in `dir`.
    ///
    /// Order: explicit path, then `RELEASE_BUCKETS_CONFIG`, then
    /// `.release-buckets.json` in `dir`, then built-in defaults.
    pub fn discover_in(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match env::var(CONFIG_ENV_VAR) {
            Ok(v) if !v.trim().is_empty() => {
                debug!("Using config from {}", CONFIG_ENV_VAR);
                return Self::load(Path::new(v.trim()));
            }
            Ok(_) => warn!("{} is set but empty, ignoring it", CONFIG_ENV_VAR),
            Err(_) => {}
        }

        let local = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        debug!("No config file found, using default groups");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::from_json("{}", Path::new("inline.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_groups_and_ignored_scopes() {
        let json = r###"{
            "groups": [["## Feat", "feat", "feature"], ["## Custom", "custom"]],
            "ignoredScopes": ["ignored", "internal"]
        }"###;
        let config = Config::from_json(json, Path::new("inline.json")).unwrap();

        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups[1].key(), "custom");
        assert!(config.is_scope_ignored("internal"));
        assert!(!config.is_scope_ignored("api"));
    }

    #[test]
    fn test_empty_groups_is_valid() {
        let config = Config::from_json(r#"{"groups": []}"#, Path::new("inline.json")).unwrap();
        assert!(config.groups.is_empty());
        assert!(config.group_for("feat").is_none());
    }

    #[test]
    fn test_incomplete_group_is_rejected() {
        let err = Config::from_json(r###"{"groups": [["## Lonely"]]}"###, Path::new("bad.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_first_matching_group_wins() {
        let config = Config::new(vec![
            GroupRule::new("## Changes", ["change", "feat"]).unwrap(),
            GroupRule::new("## Features", ["feat"]).unwrap(),
        ]);
        assert_eq!(config.group_for("feat").map(GroupRule::key), Some("change"));
    }
}
