//! Error types for release-buckets modules using thiserror.
//!
//! The grouper itself never fails; these cover the collaborators around it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating the grouping configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {path} is not valid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Group definition needs a label and at least one commit type, got {0:?}")]
    IncompleteGroup(Vec<String>),

    #[error("Group key '{0}' is reserved and cannot be configured")]
    ReservedKey(String),
}

/// Errors from reading raw commit lines.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read commit log {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read commit log from stdin: {0}")]
    StdinFailed(#[source] std::io::Error),
}

/// Errors from version definition and lookup.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Release requires a version")]
    Missing,

    #[error("Version '{0}' doesn't look right")]
    Invalid(String),

    #[error("Cannot apply a {0} bump without a current version")]
    NoBaseVersion(String),

    #[error("A {bump} bump of {base} overflows the version number")]
    Overflow { base: String, bump: String },

    #[error("Failed to read manifest {path}: {source}")]
    ManifestReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestParseFailed { path: PathBuf, reason: String },

    #[error("Manifest {0} has no version field")]
    ManifestWithoutVersion(PathBuf),

    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),
}
