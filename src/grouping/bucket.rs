//! Release buckets: commits collected between two release markers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::commit::{CommitLine, release_version};

/// Key holding the release-marker line.
pub const RELEASE_KEY: &str = "release";
/// Key holding breaking-change lines.
pub const BREAKING_KEY: &str = "breaking";
/// Catch-all key for commit types no group claims.
pub const MISC_KEY: &str = "misc";

/// Grouped commit lines of one release, or of the unreleased head.
///
/// Serializes as a flat mapping: `release` is a string, `breaking` and every
/// group key are arrays, and unset keys are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseBucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    release: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    breaking: Vec<String>,
    #[serde(flatten)]
    groups: BTreeMap<String, Vec<String>>,
}

impl ReleaseBucket {
    /// A bucket anchored to a release-marker line.
    pub fn opened_by(marker: impl Into<String>) -> Self {
        Self {
            release: Some(marker.into()),
            ..Self::default()
        }
    }

    /// Raw release-marker line, absent for the unreleased bucket.
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }

    /// Version named by the release marker.
    pub fn release_version(&self) -> Option<&str> {
        let marker = self.release.as_deref()?;
        release_version(CommitLine::parse(marker).subject)
    }

    pub fn is_released(&self) -> bool {
        self.release.is_some()
    }

    pub fn breaking(&self) -> &[String] {
        &self.breaking
    }

    /// Lines stored under a group key, in input order.
    pub fn group(&self, key: &str) -> &[String] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn misc(&self) -> &[String] {
        self.group(MISC_KEY)
    }

    /// Group keys present in this bucket, `misc` included.
    pub fn group_keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// True when no key is set at all.
    pub fn is_empty(&self) -> bool {
        self.release.is_none() && self.breaking.is_empty() && self.groups.is_empty()
    }

    /// Number of grouped lines, excluding the marker and breaking duplicates.
    pub fn commit_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub(crate) fn push(&mut self, key: &str, line: &str) {
        self.groups
            .entry(key.to_string())
            .or_default()
            .push(line.to_string());
    }

    pub(crate) fn push_breaking(&mut self, line: &str) {
        self.breaking.push(line.to_string());
    }
}
