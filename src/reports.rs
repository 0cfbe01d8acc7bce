// Saved report conventions: naming, listing, and loading report pairs.
//
// A report id is `<query>_<YYYY-MM-DD>`. Each id owns two files in the
// reports directory:
//   campaign_analysis_report_<id>.csv   (ranked posts)
//   suspicious_users_report_<id>.csv    (top users)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::{ScoredPost, UserAggregate};
use crate::output::tables;

pub const POST_REPORT_PREFIX: &str = "campaign_analysis_report_";
pub const USER_REPORT_PREFIX: &str = "suspicious_users_report_";

/// A saved report found in the reports directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub id: String,
    /// `<query> (<date>)`, or the bare id when it carries no date.
    pub display_name: String,
}

/// A saved post/user report pair.
#[derive(Debug, Clone)]
pub struct SavedReport {
    pub posts: Vec<ScoredPost>,
    pub users: Vec<UserAggregate>,
}

/// Build a report id from a search query and the run date.
///
/// The first `#` is dropped and anything that isn't alphanumeric, `-` or `_`
/// becomes `-`, so the id is always a safe file name component.
pub fn report_id(query: &str, date: NaiveDate) -> String {
    let query = query.trim().replacen('#', "", 1);
    let slug: String = query
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let slug = if slug.is_empty() { "report".to_string() } else { slug };
    format!("{slug}_{}", date.format("%Y-%m-%d"))
}

/// Paths of the (post, user) report files for an id.
pub fn report_paths(reports_dir: &Path, id: &str) -> (PathBuf, PathBuf) {
    (
        reports_dir.join(format!("{POST_REPORT_PREFIX}{id}.csv")),
        reports_dir.join(format!("{USER_REPORT_PREFIX}{id}.csv")),
    )
}

/// Human-readable name for a report id: `gaza_2025-01-31` -> `gaza (2025-01-31)`.
pub fn display_name(id: &str) -> String {
    match id.rsplit_once('_') {
        Some((query, date)) if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() => {
            format!("{query} ({date})")
        }
        _ => id.to_string(),
    }
}

/// List saved reports, newest id first. A missing directory means no reports.
pub fn list_reports(reports_dir: &Path) -> Result<Vec<ReportEntry>> {
    if !reports_dir.exists() {
        return Ok(Vec::new());
    }

    let mut ids: Vec<String> = fs::read_dir(reports_dir)
        .with_context(|| format!("Failed to read reports directory {}", reports_dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let id = name.strip_prefix(POST_REPORT_PREFIX)?.strip_suffix(".csv")?;
            Some(id.to_string())
        })
        .collect();

    ids.sort_by(|a, b| b.cmp(a));

    Ok(ids
        .into_iter()
        .map(|id| ReportEntry {
            display_name: display_name(&id),
            id,
        })
        .collect())
}

/// Load a saved report pair by id.
pub fn load_report(reports_dir: &Path, id: &str) -> Result<SavedReport> {
    let (post_path, user_path) = report_paths(reports_dir, id);
    if !post_path.exists() || !user_path.exists() {
        anyhow::bail!(
            "Report '{id}' not found in {}. Run `campaign-radar reports` to list saved reports.",
            reports_dir.display()
        );
    }
    Ok(SavedReport {
        posts: tables::read_post_report(&post_path)?,
        users: tables::read_user_report(&user_path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    #[test]
    fn id_drops_hash_and_unsafe_characters() {
        assert_eq!(report_id("#Gaza", date()), "Gaza_2025-01-31");
        assert_eq!(report_id("free speech/now", date()), "free-speech-now_2025-01-31");
        assert_eq!(report_id("#", date()), "report_2025-01-31");
    }

    #[test]
    fn display_name_splits_date() {
        assert_eq!(display_name("Gaza_2025-01-31"), "Gaza (2025-01-31)");
        assert_eq!(display_name("my_tag_2025-01-31"), "my_tag (2025-01-31)");
        assert_eq!(display_name("nodate"), "nodate");
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_reports(&dir.path().join("absent")).unwrap().is_empty());
    }
}
