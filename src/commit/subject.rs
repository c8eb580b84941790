//! Conventional commit subject parsing.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Type assigned to subjects that do not follow the conventional shape.
pub const MISC_TYPE: &str = "misc";

/// Scope of commits that only touch the changelog file itself.
pub const CHANGELOG_SCOPE: &str = "changelog";

/// Fixed prefix of a release-marker subject.
pub const RELEASE_MARKER_PREFIX: &str = "chore(release): ";

/// Pattern: type(scope)!: description, with type, scope and `!` optional.
static CONVENTIONAL_SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>[^()]*)\))?(?P<breaking>!)?: (?P<description>.*)$")
        .expect("conventional subject pattern is valid")
});

/// Structure extracted from a commit subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubject {
    pub commit_type: String,
    pub scope: Option<String>,
    pub breaking: bool,
    pub description: String,
}

impl ParsedSubject {
    /// Fallback for subjects without conventional structure.
    pub fn misc(subject: &str) -> Self {
        Self {
            commit_type: MISC_TYPE.to_string(),
            scope: None,
            breaking: false,
            description: subject.to_string(),
        }
    }

    /// Whether this commit only maintains the changelog file.
    pub fn is_changelog_maintenance(&self) -> bool {
        self.scope.as_deref() == Some(CHANGELOG_SCOPE)
    }
}

/// A subject is either a release marker or an ordinary commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    ReleaseMarker { version: String },
    Commit(ParsedSubject),
}

/// Parse a commit subject, recognising release markers first.
pub fn parse_subject(subject: &str) -> Subject {
    match release_version(subject) {
        Some(version) => Subject::ReleaseMarker {
            version: version.to_string(),
        },
        None => Subject::Commit(parse_conventional(subject)),
    }
}

/// Version string of a `chore(release): <version>` subject.
///
/// The marker shape is fixed: a `!` or any other scope makes it an
/// ordinary commit.
pub fn release_version(subject: &str) -> Option<&str> {
    subject
        .strip_prefix(RELEASE_MARKER_PREFIX)
        .map(str::trim)
        .filter(|version| !version.is_empty())
}

/// Parse `type(scope)?(!)?: description`, degrading to `misc` on mismatch.
pub fn parse_conventional(subject: &str) -> ParsedSubject {
    let Some(caps) = CONVENTIONAL_SUBJECT.captures(subject) else {
        return ParsedSubject::misc(subject);
    };

    // a bare `(scope): description` still exposes its scope, but has no type
    let commit_type = caps
        .name("type")
        .map(|m| m.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or(MISC_TYPE)
        .to_string();
    let scope = caps
        .name("scope")
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(String::from);
    let breaking = caps.name("breaking").is_some();
    let description = caps
        .name("description")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    ParsedSubject {
        commit_type,
        scope,
        breaking,
        description,
    }
}
