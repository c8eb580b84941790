//! Per-commit classification: release marker, scope filter, group match.

use crate::commit::{ParsedSubject, Subject, parse_subject};
use crate::config::Config;

use super::bucket::MISC_KEY;

/// Why a commit was dropped from all buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// Commits about the changelog file itself are never shown.
    ChangelogScope,
    /// Scope listed in the configured ignored scopes.
    IgnoredScope(String),
}

/// Outcome of classifying one commit subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'c> {
    ReleaseMarker { version: String },
    Excluded(Exclusion),
    Grouped { key: &'c str, breaking: bool },
}

/// Scope filter: whether a parsed commit must be left out entirely.
pub fn exclusion(subject: &ParsedSubject, config: &Config) -> Option<Exclusion> {
    if subject.is_changelog_maintenance() {
        return Some(Exclusion::ChangelogScope);
    }

    subject
        .scope
        .as_deref()
        .filter(|scope| config.is_scope_ignored(scope))
        .map(|scope| Exclusion::IgnoredScope(scope.to_string()))
}

/// Bucket key for a commit: first matching group, else `misc`.
pub fn group_key<'c>(subject: &ParsedSubject, config: &'c Config) -> &'c str {
    config
        .group_for(&subject.commit_type)
        .map(|group| group.key())
        .unwrap_or(MISC_KEY)
}

/// Run a subject through marker detection, scope filter and group match.
pub fn classify<'c>(subject: &str, config: &'c Config) -> Classification<'c> {
    let parsed = match parse_subject(subject) {
        Subject::ReleaseMarker { version } => return Classification::ReleaseMarker { version },
        Subject::Commit(parsed) => parsed,
    };

    if let Some(reason) = exclusion(&parsed, config) {
        return Classification::Excluded(reason);
    }

    Classification::Grouped {
        key: group_key(&parsed, config),
        breaking: parsed.breaking,
    }
}
