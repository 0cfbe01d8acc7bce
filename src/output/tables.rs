// CSV persistence for the staging table and both reports.
//
// Column order follows the struct field order. Parent directories are
// created on write so callers can point reports at a fresh directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{EnrichedPost, ScoredPost, UserAggregate};

/// Write the phase-1 staging table.
pub fn write_staging(path: &Path, posts: &[EnrichedPost]) -> Result<()> {
    write_rows(path, posts)
}

/// Read a staging table. Only the first six columns are required.
pub fn read_staging(path: &Path) -> Result<Vec<EnrichedPost>> {
    read_rows(path)
}

/// Write the ranked post report.
pub fn write_post_report(path: &Path, posts: &[ScoredPost]) -> Result<()> {
    write_rows(path, posts)
}

pub fn read_post_report(path: &Path) -> Result<Vec<ScoredPost>> {
    read_rows(path)
}

/// Write the ranked user report.
pub fn write_user_report(path: &Path, users: &[UserAggregate]) -> Result<()> {
    write_rows(path, users)
}

pub fn read_user_report(path: &Path) -> Result<Vec<UserAggregate>> {
    read_rows(path)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| {
            row.with_context(|| format!("Malformed row {} in {}", i + 1, path.display()))
        })
        .collect()
}
