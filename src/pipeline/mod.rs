// Batch analysis pipeline: load -> enrich -> stage -> score -> report.
//
// Phase 1 (enrich) is per-record and may call out to the translator.
// Phase 2 (analyze) needs the whole enriched batch before it can score any
// post. The staging table written between them is the hand-off artifact and
// also lets `rescore` rerun phase 2 alone.

pub mod analyze;
pub mod enrich;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::{EnrichedPost, RawPost};
use crate::output::report::{self, Reports};
use crate::output::tables;
use crate::reports;

use self::analyze::Analyzer;
use self::enrich::{EnrichStats, Enricher};

/// Where the two reports of a run go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    /// Caller-supplied paths.
    Explicit { posts: PathBuf, users: PathBuf },
    /// Conventional names inside a reports directory, keyed by a report id
    /// derived from the batch's search query and the run date.
    Directory(PathBuf),
}

/// Everything that identifies a single run on disk.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub run_id: String,
    /// Directory holding `scraped_data_<run_id>.json` and the staging table
    pub data_dir: PathBuf,
    pub destination: ReportDestination,
    /// Leave the staging table in place after a successful run
    pub keep_staging: bool,
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input batch was empty; nothing was written.
    EmptyInput,
    Completed(RunSummary),
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Reports,
    pub stats: EnrichStats,
    pub post_report_path: PathBuf,
    pub user_report_path: PathBuf,
    /// Set when the staging table was kept.
    pub staging_path: Option<PathBuf>,
}

/// Path of the scraper output for a run.
pub fn input_path(data_dir: &Path, run_id: &str) -> PathBuf {
    data_dir.join(format!("scraped_data_{run_id}.json"))
}

/// Path of the staging table for a run.
pub fn staging_path(data_dir: &Path, run_id: &str) -> PathBuf {
    data_dir.join(format!("preprocessed_posts_{run_id}.csv"))
}

/// Load the scraper's JSON array of posts.
///
/// A missing or malformed file is fatal for the whole run.
pub fn load_raw_posts(path: &Path) -> Result<Vec<RawPost>> {
    if !path.exists() {
        anyhow::bail!("Input file '{}' not found. Aborting.", path.display());
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let posts: Vec<RawPost> = serde_json::from_str(&json).with_context(|| {
        format!(
            "Input file {} is not a JSON array of post objects",
            path.display()
        )
    })?;
    Ok(posts)
}

/// Run both phases for one batch and write the reports.
pub async fn run(
    options: &RunOptions,
    enricher: &Enricher<'_>,
    analyzer: &Analyzer,
) -> Result<RunOutcome> {
    info!(run_id = options.run_id.as_str(), "Starting pipeline");

    let input = input_path(&options.data_dir, &options.run_id);
    let raw_posts = load_raw_posts(&input)?;

    if raw_posts.is_empty() {
        warn!(input = %input.display(), "Input batch is empty, no reports written");
        return Ok(RunOutcome::EmptyInput);
    }

    info!(posts = raw_posts.len(), "Preprocessing posts");
    let (enriched, stats) = enricher.enrich_batch(&raw_posts).await;

    let staging = staging_path(&options.data_dir, &options.run_id);
    tables::write_staging(&staging, &enriched)?;
    info!(path = %staging.display(), "Staging table written");

    let (post_report_path, user_report_path) = match &options.destination {
        ReportDestination::Explicit { posts, users } => (posts.clone(), users.clone()),
        ReportDestination::Directory(dir) => {
            let query = raw_posts
                .iter()
                .map(|p| p.search_query.as_str())
                .find(|q| !q.trim().is_empty());
            let today = chrono::Utc::now().date_naive();
            let id = match query {
                Some(query) => reports::report_id(query, today),
                None => reports::report_id(&options.run_id, today),
            };
            reports::report_paths(dir, &id)
        }
    };

    info!("Starting campaign analysis");
    let reports = score_and_write(enriched, analyzer, &post_report_path, &user_report_path)?;

    let staging_path = if options.keep_staging {
        Some(staging)
    } else {
        if let Err(e) = fs::remove_file(&staging) {
            warn!(path = %staging.display(), error = %e, "Failed to remove staging table");
        }
        None
    };

    info!(run_id = options.run_id.as_str(), "Pipeline complete");

    Ok(RunOutcome::Completed(RunSummary {
        reports,
        stats,
        post_report_path,
        user_report_path,
        staging_path,
    }))
}

/// Run phase 2 alone from a staging table. Returns `None` (and writes
/// nothing) when the table has no rows.
pub fn rescore(
    staging: &Path,
    analyzer: &Analyzer,
    post_report_path: &Path,
    user_report_path: &Path,
) -> Result<Option<Reports>> {
    let enriched = tables::read_staging(staging)?;
    if enriched.is_empty() {
        warn!(path = %staging.display(), "Staging table is empty, no reports written");
        return Ok(None);
    }
    score_and_write(enriched, analyzer, post_report_path, user_report_path).map(Some)
}

fn score_and_write(
    enriched: Vec<EnrichedPost>,
    analyzer: &Analyzer,
    post_report_path: &Path,
    user_report_path: &Path,
) -> Result<Reports> {
    let scored = analyzer.score_batch(enriched);
    let reports = report::build_reports(scored);

    tables::write_post_report(post_report_path, &reports.posts)?;
    info!(path = %post_report_path.display(), "Post report saved");

    tables::write_user_report(user_report_path, &reports.users)?;
    info!(path = %user_report_path.display(), "User report saved");

    Ok(reports)
}
