//! Release version definition.

pub mod bump;
pub mod manifest;

pub use bump::{BumpType, apply_bump, define_version, recommend_bump, release_commit_message};
pub use manifest::read_manifest_version;
