//! release-buckets - groups a conventional-commit history into release buckets.
//!
//! # Overview
//!
//! Takes the newest-first output of a `log`-style listing (`<hash> <subject>`
//! per line) and a [`Config`] of category rules, and splits the history at
//! `chore(release): <version>` markers into [`ReleaseBucket`]s ready for a
//! changelog renderer.

pub mod commit;
pub mod config;
pub mod error;
pub mod grouping;
pub mod source;
pub mod version;

// Re-export commonly used types
pub use commit::{CommitLine, ParsedSubject, Subject};
pub use config::{Config, GroupRule};
pub use error::{ConfigError, SourceError, VersionError};
pub use grouping::{ReleaseBucket, group_commits, group_from_source};
pub use source::{CommitSource, FileSource, StdinSource};
pub use version::BumpType;
