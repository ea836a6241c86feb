//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! Writes go through a temporary file in the same directory that is renamed
//! over the original, so a failed write never leaves a half-written file.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or is not valid UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replace a file's content atomically.
  ///
  /// The content is written to a temporary file next to `path`, the
  /// original permissions are copied onto it, and it is then renamed over
  /// `path`. If `path` is a symlink, its target is replaced and the link is
  /// left in place.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `content` - Content to write to the file
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if path.is_symlink() {
      let target =
        std::fs::canonicalize(path).with_context(|| format!("Failed to resolve symlink: {}", path.display()))?;
      return Self::write_file(&target, content);
    }

    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut temp_file =
      NamedTempFile::new_in(dir).with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;

    temp_file
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write file: {}", path.display()))?;
    temp_file
      .as_file()
      .sync_all()
      .with_context(|| format!("Failed to flush file: {}", path.display()))?;

    if let Ok(metadata) = std::fs::metadata(path) {
      temp_file
        .as_file()
        .set_permissions(metadata.permissions())
        .with_context(|| format!("Failed to copy permissions for: {}", path.display()))?;
    }

    temp_file
      .persist(path)
      .map_err(|e| e.error)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
  }
}
