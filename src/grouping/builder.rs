//! Single pass over a newest-first log, folding commits into buckets.

use tracing::{debug, info};

use crate::commit::CommitLine;
use crate::config::Config;
use crate::error::SourceError;
use crate::source::CommitSource;

use super::bucket::ReleaseBucket;
use super::classify::{Classification, classify};

/// Group raw `<hash> <subject>` lines into release buckets.
///
/// Lines are expected newest first. A release marker closes whatever was
/// collected above it and opens the bucket of that release, so the first
/// bucket holds the most recent activity. Empty accumulators are never
/// emitted.
pub fn group_commits<I, S>(lines: I, config: &Config) -> Vec<ReleaseBucket>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buckets = Vec::new();
    let mut current = ReleaseBucket::default();

    for raw in lines {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            continue;
        }

        let line = CommitLine::parse(raw);
        match classify(line.subject, config) {
            Classification::ReleaseMarker { version } => {
                debug!(hash = line.short_hash(), %version, "Release marker");
                let finished = std::mem::replace(&mut current, ReleaseBucket::opened_by(raw));
                if !finished.is_empty() {
                    buckets.push(finished);
                }
            }
            Classification::Excluded(reason) => {
                debug!(hash = line.short_hash(), ?reason, "Skipping commit");
            }
            Classification::Grouped { key, breaking } => {
                if breaking {
                    current.push_breaking(raw);
                }
                current.push(key, raw);
            }
        }
    }

    if !current.is_empty() {
        buckets.push(current);
    }

    info!(
        buckets = buckets.len(),
        commits = buckets.iter().map(ReleaseBucket::commit_count).sum::<usize>(),
        "Grouped commits"
    );
    buckets
}

/// Fetch lines from a source and group them.
pub async fn group_from_source<S>(
    source: &S,
    config: &Config,
) -> Result<Vec<ReleaseBucket>, SourceError>
where
    S: CommitSource + ?Sized,
{
    let lines = source.fetch_lines().await?;
    debug!(lines = lines.len(), "Fetched commit lines");
    Ok(group_commits(&lines, config))
}
