//! Commit grouping into release buckets.

pub mod bucket;
pub mod builder;
pub mod classify;

pub use bucket::{BREAKING_KEY, MISC_KEY, RELEASE_KEY, ReleaseBucket};
pub use builder::{group_commits, group_from_source};
pub use classify::{Classification, Exclusion, classify, exclusion, group_key};
