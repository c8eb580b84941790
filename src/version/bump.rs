//! Next-version definition for a release.

use semver::Version;

use crate::commit::subject::RELEASE_MARKER_PREFIX;
use crate::config::{Config, GroupRule};
use crate::error::VersionError;
use crate::grouping::ReleaseBucket;

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BumpType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(format!("Unknown bump type: {}", s)),
        }
    }
}

/// Apply a bump to a version, resetting lower components and pre-release data.
pub fn apply_bump(base: &Version, bump: BumpType) -> Result<Version, VersionError> {
    let overflow = || VersionError::Overflow {
        base: base.to_string(),
        bump: bump.to_string(),
    };

    let next = match bump {
        BumpType::Major => Version::new(base.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        BumpType::Minor => {
            Version::new(base.major, base.minor.checked_add(1).ok_or_else(overflow)?, 0)
        }
        BumpType::Patch => Version::new(
            base.major,
            base.minor,
            base.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };
    Ok(next)
}

/// Resolve the version a release should carry.
///
/// `input` is either a bump keyword (`major`, `minor`, `patch`) applied to
/// `current`, or an explicit semver version, optionally `v`-prefixed.
pub fn define_version(input: &str, current: Option<&Version>) -> Result<Version, VersionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(VersionError::Missing);
    }

    if let Ok(bump) = input.parse::<BumpType>() {
        let base = current.ok_or_else(|| VersionError::NoBaseVersion(bump.to_string()))?;
        return apply_bump(base, bump);
    }

    let explicit = input.strip_prefix('v').unwrap_or(input);
    Version::parse(explicit).map_err(|_| VersionError::Invalid(input.to_string()))
}

/// Suggest a bump for the commits collected in a bucket.
///
/// Breaking changes = major, a line in the group collecting `feat` = minor,
/// anything else = patch.
pub fn recommend_bump(bucket: &ReleaseBucket, config: &Config) -> BumpType {
    if !bucket.breaking().is_empty() {
        return BumpType::Major;
    }

    let feature_key = config.group_for("feat").map(GroupRule::key);
    if feature_key.is_some_and(|key| !bucket.group(key).is_empty()) {
        return BumpType::Minor;
    }

    BumpType::Patch
}

/// Subject of the commit recording a release.
///
/// Grouping recognises it as a release marker on the next run.
pub fn release_commit_message(version: &Version) -> String {
    format!("{}{}", RELEASE_MARKER_PREFIX, version)
}
