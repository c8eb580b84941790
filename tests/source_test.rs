//! Integration tests for commit sources feeding the grouper.

mod common;

use async_trait::async_trait;
use release_buckets::config::Config;
use release_buckets::error::SourceError;
use release_buckets::grouping::group_from_source;
use release_buckets::source::{CommitSource, FileSource};

/// In-memory source standing in for a real log.
struct StaticSource(Vec<&'static str>);

#[async_trait]
impl CommitSource for StaticSource {
    async fn fetch_lines(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.0.iter().map(|l| l.to_string()).collect())
    }
}

/// Source that always fails.
struct BrokenSource;

#[async_trait]
impl CommitSource for BrokenSource {
    async fn fetch_lines(&self) -> Result<Vec<String>, SourceError> {
        Err(SourceError::StdinFailed(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        )))
    }
}

#[tokio::test]
async fn test_group_from_static_source() {
    let source = StaticSource(vec!["h1 fix: a", "h2 feat: b"]);
    let buckets = group_from_source(&source, &Config::default()).await.unwrap();

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].group("fix"), ["h1 fix: a"]);
    assert_eq!(buckets[0].group("feat"), ["h2 feat: b"]);
}

#[tokio::test]
async fn test_group_from_file_source() {
    let source = FileSource::new(common::log_fixture("with_release.txt"));
    let buckets = group_from_source(&source, &Config::default()).await.unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[1].release_version(), Some("0.1.0"));
}

#[tokio::test]
async fn test_source_error_propagates() {
    let err = group_from_source(&BrokenSource, &Config::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("pipe closed"));
}

#[tokio::test]
async fn test_boxed_source() {
    let source: Box<dyn CommitSource> = Box::new(StaticSource(vec!["h1 chore(release): 1.0.0"]));
    let buckets = group_from_source(source.as_ref(), &Config::default())
        .await
        .unwrap();

    assert_eq!(buckets.len(), 1);
    assert!(buckets[0].is_released());
}
