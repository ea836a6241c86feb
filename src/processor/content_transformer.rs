//! # Content Transformer Module
//!
//! This module finds where a header belongs in a file and splices it in.
//!
//! The header goes immediately before the first line that is not blank, not
//! a shebang and not an identity line written by an earlier run. A file that
//! has no such line gets the header appended at its end.

use crate::license_detection::LicenseDetector;

/// Outcome of splicing a header into file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
  /// The content already carries a copyright marker and is left alone.
  AlreadyPresent,
  /// The header was placed before the first significant line.
  Inserted(String),
  /// No significant line was found, so the header was added at the end.
  Appended(String),
}

impl Insertion {
  /// The new content, if the header had to be added.
  pub fn new_content(&self) -> Option<&str> {
    match self {
      Self::AlreadyPresent => None,
      Self::Inserted(content) | Self::Appended(content) => Some(content),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  Scanning,
  AlreadyHeadered,
  Inserted,
}

/// Places a rendered header into file content for one comment style.
pub struct ContentTransformer {
  /// Rendered header text for this style
  header: String,
  /// `<prefix> <program name>`; lines starting with it are skipped
  identity_marker: String,
}

impl ContentTransformer {
  /// Creates a new ContentTransformer.
  ///
  /// # Parameters
  ///
  /// * `header` - The rendered header, as produced by [`Header::render`]
  /// * `identity_marker` - The commented identity line prefix, as produced by [`Header::identity_marker`]
  ///
  /// [`Header::render`]: crate::header::Header::render
  /// [`Header::identity_marker`]: crate::header::Header::identity_marker
  pub const fn new(header: String, identity_marker: String) -> Self {
    Self {
      header,
      identity_marker,
    }
  }

  /// The rendered header this transformer inserts.
  pub fn header(&self) -> &str {
    &self.header
  }

  /// Checks whether a line may sit above the header.
  ///
  /// Blank lines, shebangs and identity lines are skipped; leading
  /// whitespace is ignored for all three.
  pub fn is_skippable(&self, line: &str) -> bool {
    let stripped = line.trim_start();
    stripped.is_empty() || stripped.starts_with("#!") || stripped.starts_with(&self.identity_marker)
  }

  /// Checks whether the content contains an identity line from an earlier
  /// run.
  pub fn has_identity_line(&self, content: &str) -> bool {
    content
      .lines()
      .any(|line| line.trim_start().starts_with(&self.identity_marker))
  }

  /// Splices the header into `content`.
  ///
  /// Every original line is kept verbatim, line terminators included. A
  /// marker line anywhere in the content means the header is already present
  /// and nothing changes.
  pub fn insert_header(&self, content: &str, detector: &dyn LicenseDetector) -> Insertion {
    if detector.has_license(content) {
      return Insertion::AlreadyPresent;
    }

    let mut state = ScanState::Scanning;
    let mut output = String::with_capacity(content.len() + self.header.len() + 1);

    for line in content.split_inclusive('\n') {
      if state == ScanState::Scanning {
        if detector.is_marker_line(line) {
          state = ScanState::AlreadyHeadered;
        } else if !self.is_skippable(line) {
          output.push_str(&self.header);
          state = ScanState::Inserted;
        }
      }
      output.push_str(line);
    }

    match state {
      ScanState::AlreadyHeadered => Insertion::AlreadyPresent,
      ScanState::Inserted => Insertion::Inserted(output),
      ScanState::Scanning => {
        if !output.is_empty() && !output.ends_with('\n') {
          output.push('\n');
        }
        output.push_str(&self.header);
        Insertion::Appended(output)
      }
    }
  }
}
