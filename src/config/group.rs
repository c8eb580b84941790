//! Group definitions mapping commit types to bucket keys.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grouping::{BREAKING_KEY, RELEASE_KEY};

/// One configured group: a display label plus the commit types it collects.
///
/// Written in config files as an alias list, `["## Features", "feat", "feature"]`:
/// the label comes first, the first alias (lower-cased) is the bucket key,
/// and every alias is a commit type that lands in the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GroupRule {
    label: String,
    key: String,
    types: Vec<String>,
}

impl GroupRule {
    /// Build a group from its label and commit-type aliases.
    pub fn new<I, S>(label: impl Into<String>, aliases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        let types: Vec<String> = aliases.into_iter().map(Into::into).collect();

        let Some(first) = types.first() else {
            return Err(ConfigError::IncompleteGroup(vec![label]));
        };

        let key = first.to_lowercase();
        if key == RELEASE_KEY || key == BREAKING_KEY {
            return Err(ConfigError::ReservedKey(key));
        }

        Ok(Self { label, key, types })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Bucket key lines of this group are stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Exact, case-sensitive match against the configured aliases.
    pub fn matches(&self, commit_type: &str) -> bool {
        self.types.iter().any(|t| t == commit_type)
    }
}

impl TryFrom<Vec<String>> for GroupRule {
    type Error = ConfigError;

    fn try_from(mut aliases: Vec<String>) -> Result<Self, Self::Error> {
        if aliases.len() < 2 {
            return Err(ConfigError::IncompleteGroup(aliases));
        }
        let label = aliases.remove(0);
        Self::new(label, aliases)
    }
}

impl From<GroupRule> for Vec<String> {
    fn from(rule: GroupRule) -> Self {
        let mut aliases = Vec::with_capacity(rule.types.len() + 1);
        aliases.push(rule.label);
        aliases.extend(rule.types);
        aliases
    }
}

/// Groups used when no configuration says otherwise.
pub fn default_groups() -> Vec<GroupRule> {
    vec![
        GroupRule {
            label: "## Features".to_string(),
            key: "feat".to_string(),
            types: vec!["feat".to_string(), "feature".to_string()],
        },
        GroupRule {
            label: "## Bug Fixes".to_string(),
            key: "fix".to_string(),
            types: vec!["fix".to_string()],
        },
    ]
}
