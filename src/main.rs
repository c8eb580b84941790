//! release-buckets - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use semver::Version;
use tracing::info;
use tracing_subscriber::EnvFilter;

use release_buckets::config::Config;
use release_buckets::grouping::{ReleaseBucket, group_from_source};
use release_buckets::source::{CommitSource, FileSource, StdinSource};
use release_buckets::version::{
    define_version, read_manifest_version, recommend_bump, release_commit_message,
};

/// Log filter for `--verbose`: this crate at debug, dependencies at warn.
const VERBOSE_FILTER: &str = "warn,release_buckets=debug";

/// Group conventional commits into release buckets.
#[derive(Parser, Debug)]
#[command(name = "release-buckets")]
#[command(about = "Group conventional commits into release buckets")]
#[command(version)]
struct Cli {
    /// Path to a JSON config file (defaults to $RELEASE_BUCKETS_CONFIG or .release-buckets.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the release buckets of a `<hash> <subject>` log as JSON
    Group {
        /// Log file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Resolve the next release version and its commit message
    Next {
        /// Explicit version, a bump (major, minor, patch) or "auto"
        target: String,

        /// Current version to bump from
        #[arg(long, conflicts_with = "manifest")]
        current: Option<Version>,

        /// Cargo.toml or package.json holding the current version
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Log file used by "auto" (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Group { input } => {
            let buckets = read_buckets(input, &config).await?;
            let json =
                serde_json::to_string_pretty(&buckets).context("Failed to serialize buckets")?;
            println!("{}", json);
        }
        Command::Next {
            target,
            current,
            manifest,
            input,
        } => {
            let current = match (current, manifest) {
                (Some(version), _) => Some(version),
                (None, Some(path)) => Some(
                    read_manifest_version(&path)
                        .with_context(|| format!("Failed to read version from {}", path.display()))?,
                ),
                (None, None) => None,
            };

            let target = if target.eq_ignore_ascii_case("auto") {
                let buckets = read_buckets(input, &config).await?;
                match buckets.first() {
                    Some(bucket) if !bucket.is_released() => {
                        recommend_bump(bucket, &config).to_string()
                    }
                    _ => bail!("No unreleased commits to derive a version from"),
                }
            } else {
                target
            };

            let next = define_version(&target, current.as_ref())?;
            info!(%next, "Resolved next version");
            println!("{}", next);
            println!("{}", release_commit_message(&next));
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins unless `--verbose` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read commit lines from a file or stdin and group them.
async fn read_buckets(input: Option<PathBuf>, config: &Config) -> Result<Vec<ReleaseBucket>> {
    let source: Box<dyn CommitSource> = match input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(StdinSource),
    };

    group_from_source(source.as_ref(), config)
        .await
        .context("Failed to read commit lines")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_verbose_filter_keeps_dependencies_at_warn() {
        let filter = EnvFilter::try_new(VERBOSE_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(VERBOSE_FILTER.split(',').next(), Some("warn"));
    }
}
