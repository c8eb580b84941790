//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to a commit log fixture.
pub fn log_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("logs").join(name)
}

/// Get the path to a config fixture.
pub fn config_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("configs").join(name)
}

/// Read a log fixture as its non-empty lines.
pub fn read_log(name: &str) -> Vec<String> {
    let path = log_fixture(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}
