//! # Processor Module
//!
//! This module contains the core functionality for walking a tree, checking
//! files for a copyright header and inserting the header where it is
//! missing.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and atomic writing
//! - [`content_transformer`] - Locating the insertion point and splicing in the header
//! - [`file_collector`] - Directory traversal with pruning of excluded directories
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules. Processing is sequential: one walk per comment style, then one
//! file at a time.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
pub use content_transformer::{ContentTransformer, Insertion};
pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::diff::DiffManager;
use crate::header::Header;
use crate::info_log;
use crate::license_detection::{CopyrightMarkerDetector, LicenseDetector};
use crate::report::{FileAction, FileReport};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub config: Config,

  /// Only report missing headers; never write files
  pub check_only: bool,

  // Optional components
  pub diff_manager: Option<DiffManager>,
  pub license_detector: Option<Box<dyn LicenseDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig in insert mode with no optional
  /// components.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(config)
  /// }
  /// ```
  pub const fn new(config: Config) -> Self {
    Self {
      config,
      check_only: false,
      diff_manager: None,
      license_detector: None,
    }
  }
}

/// A comment style ready for use: compiled glob plus its transformer.
struct CompiledStyle {
  pattern: glob::Pattern,
  transformer: ContentTransformer,
}

/// Processor for checking and inserting copyright headers.
///
/// The `Processor` is responsible for:
/// - Walking the tree once per comment style
/// - Deciding whether each file already has a header
/// - Inserting the header in insert mode, or reporting its absence in check mode
/// - Collecting a report entry for every file it examined
pub struct Processor {
  /// Comment styles in configuration order
  styles: Vec<CompiledStyle>,

  /// File collector for directory traversal
  file_collector: FileCollector,

  /// License detector for checking if files have a header
  license_detector: Box<dyn LicenseDetector>,

  /// Whether to only check for headers without modifying files
  check_only: bool,

  /// Manager for rendering diffs in check mode
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  /// - The configuration fails validation
  /// - Any file or directory glob is invalid
  pub fn new(processor_config: ProcessorConfig) -> Result<Self> {
    let config = processor_config.config;
    config.validate().context("Invalid configuration")?;

    let header = Header::from_config(&config);

    let styles = config
      .comment_styles
      .iter()
      .map(|style| -> Result<CompiledStyle> {
        let pattern =
          glob::Pattern::new(&style.pattern).with_context(|| format!("Invalid file glob: {}", style.pattern))?;
        let transformer = ContentTransformer::new(header.render(&style.prefix), header.identity_marker(&style.prefix));
        Ok(CompiledStyle { pattern, transformer })
      })
      .collect::<Result<Vec<_>>>()?;

    let file_collector = FileCollector::new(&config.exclude_dirs)?;

    let license_detector: Box<dyn LicenseDetector> = match processor_config.license_detector {
      Some(detector) => detector,
      None => Box::new(CopyrightMarkerDetector::new(&config.copyright_holder)?),
    };

    let diff_manager = processor_config.diff_manager.unwrap_or_else(|| DiffManager::new(false));

    Ok(Self {
      styles,
      file_collector,
      license_detector,
      check_only: processor_config.check_only,
      diff_manager,
    })
  }

  /// Processes every matching file under `root`.
  ///
  /// Each comment style gets its own walk; a file matching several styles is
  /// processed once per style.
  ///
  /// # Returns
  ///
  /// One report per file examined, in processing order.
  ///
  /// # Errors
  ///
  /// Returns an error on the first walk, read or write failure.
  pub fn process(&self, root: &Path) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();

    for style in &self.styles {
      let files = self.file_collector.collect(root, &style.pattern)?;
      debug!("Processing {} files matching {}", files.len(), style.pattern);

      for path in files {
        reports.push(self.process_file(&path, &style.transformer)?);
      }
    }

    Ok(reports)
  }

  /// Checks or updates a single file with the given transformer.
  pub fn process_file(&self, path: &Path, transformer: &ContentTransformer) -> Result<FileReport> {
    trace!("Processing file: {}", path.display());
    let content = FileIO::read_full_content(path)?;

    if self.check_only {
      return Ok(self.check_content(path, &content, transformer));
    }

    let insertion = transformer.insert_header(&content, self.license_detector.as_ref());
    let action = match &insertion {
      Insertion::AlreadyPresent => {
        trace!("Skipping: {} (header present)", path.display());
        return Ok(report(path, true, FileAction::NoActionNeeded));
      }
      Insertion::Inserted(new_content) => {
        FileIO::write_file(path, new_content)?;
        FileAction::Inserted
      }
      Insertion::Appended(new_content) => {
        FileIO::write_file(path, new_content)?;
        FileAction::Appended
      }
    };

    if transformer.has_identity_line(&content) {
      warn!(
        "{} had an identity line but no copyright line; the header was inserted after it",
        path.display()
      );
    }
    info_log!("Added copyright to: {}", path.display());

    Ok(report(path, false, action))
  }

  fn check_content(&self, path: &Path, content: &str, transformer: &ContentTransformer) -> FileReport {
    if self.license_detector.has_license(content) {
      return report(path, true, FileAction::NoActionNeeded);
    }

    if self.diff_manager.show_diff {
      let insertion = transformer.insert_header(content, self.license_detector.as_ref());
      if let Some(new_content) = insertion.new_content() {
        self.diff_manager.display_diff(path, content, new_content);
      }
    }

    report(path, false, FileAction::Missing)
  }

  /// Checks if the content already has a copyright header.
  pub fn has_license(&self, content: &str) -> bool {
    self.license_detector.has_license(content)
  }

  /// Collects the files a run would visit, without reading them.
  pub fn collect_planned_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for style in &self.styles {
      files.extend(self.file_collector.collect(root, &style.pattern)?);
    }
    Ok(files)
  }
}

fn report(path: &Path, had_header: bool, action: FileAction) -> FileReport {
  FileReport {
    path: path.to_path_buf(),
    had_header,
    action,
  }
}
