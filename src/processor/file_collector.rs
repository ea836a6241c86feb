//! # File Collector Module
//!
//! This module walks a directory tree and collects the files whose base name
//! matches a glob, pruning excluded directories as it goes.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// File collector for pattern matching and directory traversal.
///
/// The `FileCollector` handles:
/// - Pruning directories whose name matches an exclusion glob, at any depth
/// - Matching file base names against a glob
/// - Returning the matches in a stable order
pub struct FileCollector {
  /// Directory name globs that are never descended into
  excluded_dirs: Vec<glob::Pattern>,
}

impl FileCollector {
  /// Creates a new FileCollector with the given directory exclusion globs.
  ///
  /// # Errors
  ///
  /// Returns an error if any of the globs is invalid.
  pub fn new(excluded_dirs: &[String]) -> Result<Self> {
    let excluded_dirs = excluded_dirs
      .iter()
      .map(|dir| glob::Pattern::new(dir).with_context(|| format!("Invalid directory glob: {}", dir)))
      .collect::<Result<Vec<_>>>()?;

    Ok(Self { excluded_dirs })
  }

  /// Collects every file under `root` whose base name matches
  /// `file_pattern`.
  ///
  /// Excluded directories are pruned during the walk, so nothing beneath them
  /// is visited. The root itself is never pruned. Symlinked directories are
  /// not descended into; symlinks to regular files are collected like the
  /// files themselves.
  ///
  /// # Returns
  ///
  /// The matching paths, sorted. A root that does not exist or is not a
  /// directory yields an empty list.
  ///
  /// # Errors
  ///
  /// Returns an error if a directory cannot be read during the walk.
  pub fn collect(&self, root: &Path, file_pattern: &glob::Pattern) -> Result<Vec<PathBuf>> {
    if !root.exists() {
      warn!("Root directory does not exist: {}", root.display());
      return Ok(Vec::new());
    }
    if !root.is_dir() {
      warn!("Root is not a directory: {}", root.display());
      return Ok(Vec::new());
    }

    debug!("Scanning {} for {}", root.display(), file_pattern);
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
      .into_iter()
      .filter_entry(|entry| !self.is_excluded_dir(entry));

    for entry in walker {
      let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;

      if is_file_or_file_link(&entry) && name_matches(file_pattern, entry.file_name()) {
        files.push(entry.into_path());
      }
    }

    files.sort();

    debug!(
      "Found {} files matching {} in {}ms",
      files.len(),
      file_pattern,
      start_time.elapsed().as_millis()
    );

    Ok(files)
  }

  fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
      return false;
    }

    let excluded = self
      .excluded_dirs
      .iter()
      .any(|pattern| name_matches(pattern, entry.file_name()));
    if excluded {
      trace!("Skipping: {} (excluded directory)", entry.path().display());
    }
    excluded
  }
}

fn is_file_or_file_link(entry: &DirEntry) -> bool {
  entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn name_matches(pattern: &glob::Pattern, name: &OsStr) -> bool {
  name.to_str().is_some_and(|name| pattern.matches(name))
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;
  use crate::config::EXCLUDED_DIRS;

  fn default_collector() -> FileCollector {
    let excluded: Vec<String> = EXCLUDED_DIRS.iter().map(|dir| dir.to_string()).collect();
    FileCollector::new(&excluded).unwrap()
  }

  fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "int x;\n").unwrap();
  }

  fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
      .iter()
      .map(|file| file.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
      .collect()
  }

  #[test]
  fn test_collect_matches_base_name() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    touch(root, "main.cpp");
    touch(root, "src/render/mesh.cpp");
    touch(root, "src/render/mesh.hpp");
    touch(root, "src/notes.cpp.txt");

    let pattern = glob::Pattern::new("*.cpp").unwrap();
    let files = default_collector().collect(root, &pattern).unwrap();

    assert_eq!(relative(root, &files), vec!["main.cpp", "src/render/mesh.cpp"]);
  }

  #[test]
  fn test_collect_prunes_excluded_dirs_at_any_depth() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    touch(root, "keep.cpp");
    touch(root, "extern/lib.cpp");
    touch(root, "build/gen.cpp");
    touch(root, "build-release/gen.cpp");
    touch(root, "src/assets/shader.cpp");
    touch(root, "src/deep/config/settings.cpp");
    touch(root, "src/configs/kept.cpp");
    touch(root, "src/mybuild/kept.cpp");

    let pattern = glob::Pattern::new("*.cpp").unwrap();
    let files = default_collector().collect(root, &pattern).unwrap();

    assert_eq!(
      relative(root, &files),
      vec!["keep.cpp", "src/configs/kept.cpp", "src/mybuild/kept.cpp"]
    );
  }

  #[test]
  fn test_collect_does_not_prune_root() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("build");
    touch(&root, "a.hpp");

    let pattern = glob::Pattern::new("*.hpp").unwrap();
    let files = default_collector().collect(&root, &pattern).unwrap();

    assert_eq!(files, vec![root.join("a.hpp")]);
  }

  #[test]
  fn test_collect_excluded_name_only_applies_to_dirs() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    touch(root, "config");

    let pattern = glob::Pattern::new("config").unwrap();
    let files = default_collector().collect(root, &pattern).unwrap();

    assert_eq!(files.len(), 1);
  }

  #[test]
  fn test_collect_missing_root_is_empty() {
    let temp_dir = tempdir().unwrap();
    let pattern = glob::Pattern::new("*.cpp").unwrap();
    let files = default_collector()
      .collect(&temp_dir.path().join("missing"), &pattern)
      .unwrap();

    assert!(files.is_empty());
  }

  #[test]
  fn test_collect_file_root_is_empty() {
    let temp_dir = tempdir().unwrap();
    touch(temp_dir.path(), "lone.cpp");

    let pattern = glob::Pattern::new("*.cpp").unwrap();
    let files = default_collector()
      .collect(&temp_dir.path().join("lone.cpp"), &pattern)
      .unwrap();

    assert!(files.is_empty());
  }

  #[cfg(unix)]
  #[test]
  fn test_collect_symlinks() {
    use std::os::unix::fs::symlink;

    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("root");
    let outside = temp_dir.path().join("outside");
    touch(&outside, "real.cpp");
    touch(&outside, "linked_dir/inner.cpp");
    fs::create_dir_all(&root).unwrap();
    symlink(outside.join("real.cpp"), root.join("link.cpp")).unwrap();
    symlink(outside.join("linked_dir"), root.join("linked_dir")).unwrap();
    symlink(outside.join("gone.cpp"), root.join("dangling.cpp")).unwrap();

    let pattern = glob::Pattern::new("*.cpp").unwrap();
    let files = default_collector().collect(&root, &pattern).unwrap();

    assert_eq!(relative(&root, &files), vec!["link.cpp"]);
  }

  #[test]
  fn test_new_rejects_bad_glob() {
    assert!(FileCollector::new(&["[".to_string()]).is_err());
  }
}
