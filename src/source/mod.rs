//! Sources of raw `<hash> <subject>` commit lines.
//!
//! Retrieval from a version-control system happens upstream (for example
//! `git log --format='%H %s'`); these sources only read its output.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::SourceError;

/// Trait for reading an ordered, newest-first list of commit lines.
///
/// This abstraction allows mocking the log input in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Return every non-blank line, in input order.
    async fn fetch_lines(&self) -> Result<Vec<String>, SourceError>;
}

/// Reads commit lines from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CommitSource for FileSource {
    async fn fetch_lines(&self) -> Result<Vec<String>, SourceError> {
        let read_failed = |source: std::io::Error| SourceError::ReadFailed {
            path: self.path.clone(),
            source,
        };

        let file = tokio::fs::File::open(&self.path).await.map_err(read_failed)?;
        read_lines(BufReader::new(file)).await.map_err(read_failed)
    }
}

/// Reads commit lines piped on standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

#[async_trait]
impl CommitSource for StdinSource {
    async fn fetch_lines(&self) -> Result<Vec<String>, SourceError> {
        read_lines(BufReader::new(tokio::io::stdin()))
            .await
            .map_err(SourceError::StdinFailed)
    }
}

/// Collect non-blank lines, dropping trailing carriage returns.
pub async fn read_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut collected = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            collected.push(line.to_string());
        }
    }

    Ok(collected)
}
