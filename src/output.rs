//! # Output Module
//!
//! This module centralizes all user-facing output for the add-copyright tool.
//!
//! ## Design Goals
//!
//! - **Scriptable**: in check mode stdout carries only the per-file
//!   diagnostics, one line each, in a fixed format
//! - **Quiet by default**: nothing on stdout when every file is fine
//! - **Progressive**: a colored summary on stderr with `-v`

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream};

use add_copyright::logging::is_verbose;
use add_copyright::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/has header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing header
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Formats the check-mode diagnostic for a file without a header.
pub fn format_missing_line(path: &Path) -> String {
  format!("{}  has no copyright message.", path.display())
}

/// Print one diagnostic line per file missing a header, in report order.
///
/// Printed regardless of quiet mode and never colored, since scripts parse
/// it.
///
/// # Returns
///
/// The number of lines printed.
pub fn print_missing_files(reports: &[FileReport]) -> usize {
  let mut count = 0;
  for report in reports.iter().filter(|report| report.action == FileAction::Missing) {
    println!("{}", format_missing_line(&report.path));
    count += 1;
  }
  count
}

/// Print the files a run would visit, one per line.
pub fn print_planned_files(files: &[PathBuf]) {
  for file in files {
    println!("{}", file.display());
  }
}

/// Print the processing summary to stderr. Only shown in verbose mode.
///
/// Format: "✓ Summary: X files, Y with header, Z added (T.TTs)", with
/// "W missing" in place of "Z added" in check mode.
pub fn print_summary(summary: &ProcessingSummary, check_only: bool) {
  if !is_verbose() {
    return;
  }

  let symbol = if summary.missing > 0 {
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()).to_string()
  } else {
    symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green()).to_string()
  };

  let tail = if check_only {
    format!(
      "{} missing",
      summary.missing.if_supports_color(Stream::Stderr, |s| s.yellow())
    )
  } else {
    format!("{} added", summary.added.if_supports_color(Stream::Stderr, |s| s.cyan()))
  };

  eprintln!(
    "{} Summary: {} files, {} with header, {} ({:.2}s)",
    symbol,
    summary.total,
    summary.with_header,
    tail,
    summary.elapsed_ms as f64 / 1000.0
  );
}
