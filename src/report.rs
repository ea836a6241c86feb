//! # Report Module
//!
//! This module records what happened to each processed file and can write
//! the records, with a summary, as a JSON report.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Information about a processed file for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file, as found by the walk
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// Whether the file had a copyright header before this run
  pub had_header: bool,
  /// Action taken on the file
  pub action: FileAction,
}

/// Possible outcomes for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// Header was placed before the first significant line
  Inserted,
  /// Header was added at the end of a file with no significant lines
  Appended,
  /// File already had a header
  #[serde(rename = "none")]
  NoActionNeeded,
  /// Check mode found no header
  Missing,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Totals across a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSummary {
  /// Number of files examined
  pub total: usize,
  /// Files that already had a header
  pub with_header: usize,
  /// Files that received a header in this run
  pub added: usize,
  /// Files reported as missing a header (check mode)
  pub missing: usize,
  /// Wall time of the run in milliseconds
  pub elapsed_ms: u64,
}

impl ProcessingSummary {
  pub fn from_reports(reports: &[FileReport], elapsed: Duration) -> Self {
    let count = |pred: fn(&FileReport) -> bool| reports.iter().filter(|report| pred(report)).count();

    Self {
      total: reports.len(),
      with_header: count(|report| report.had_header),
      added: count(|report| matches!(report.action, FileAction::Inserted | FileAction::Appended)),
      missing: count(|report| report.action == FileAction::Missing),
      elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    }
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Writes the reports and summary to `output_path` as pretty-printed JSON.
pub fn write_json_report(output_path: &Path, reports: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let report = JsonReport {
    summary,
    files: reports,
  };
  let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
  fs::write(output_path, json).with_context(|| format!("Failed to write report: {}", output_path.display()))
}
