//! # License Detection Module
//!
//! This module contains the interfaces and implementations for detecting an
//! existing copyright header. It allows for replacing the detection algorithm
//! without modifying the processor.

use anyhow::{Context, Result};
use regex::Regex;

/// Trait for license detectors.
///
/// Implementations decide whether a single line marks an existing header.
/// A file has a header iff any of its lines is a marker line.
pub trait LicenseDetector {
  /// Checks if one line of a file is a copyright marker.
  fn is_marker_line(&self, line: &str) -> bool;

  /// Checks if the content already has a copyright header anywhere in it.
  fn has_license(&self, content: &str) -> bool {
    content.lines().any(|line| self.is_marker_line(line))
  }
}

/// Detects the project's copyright line, `Copyright (C) <year>  <holder>`.
///
/// Any year is accepted; the holder must match exactly, including the two
/// spaces that precede it.
#[derive(Debug, Clone)]
pub struct CopyrightMarkerDetector {
  marker: Regex,
}

impl CopyrightMarkerDetector {
  /// Creates a detector for the given copyright holder.
  ///
  /// # Errors
  ///
  /// Returns an error if the marker pattern fails to compile.
  pub fn new(holder: &str) -> Result<Self> {
    let pattern = format!(r"Copyright \(C\) \d+  {}", regex::escape(holder));
    let marker = Regex::new(&pattern).with_context(|| format!("Invalid copyright marker pattern: {}", pattern))?;
    Ok(Self { marker })
  }
}

impl LicenseDetector for CopyrightMarkerDetector {
  fn is_marker_line(&self, line: &str) -> bool {
    self.marker.is_match(line)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn detector() -> CopyrightMarkerDetector {
    CopyrightMarkerDetector::new("Cole Reynolds").unwrap()
  }

  #[test]
  fn test_marker_line_any_year() {
    let detector = detector();
    assert!(detector.is_marker_line("// Copyright (C) 2024  Cole Reynolds"));
    assert!(detector.is_marker_line("# Copyright (C) 1999  Cole Reynolds\n"));
    assert!(detector.is_marker_line("  * see Copyright (C) 7  Cole Reynolds and others"));
  }

  #[test]
  fn test_marker_line_holder_exact() {
    let detector = detector();
    assert!(!detector.is_marker_line("// Copyright (C) 2024 Cole Reynolds"));
    assert!(!detector.is_marker_line("// Copyright (c) 2024  Cole Reynolds"));
    assert!(!detector.is_marker_line("// Copyright (C) 2024  Someone Else"));
    assert!(!detector.is_marker_line("// Copyright (C)  Cole Reynolds"));
  }

  #[test]
  fn test_has_license_anywhere_in_file() {
    let detector = detector();

    let at_top = "// Copyright (C) 2024  Cole Reynolds\nint x;\n";
    assert!(detector.has_license(at_top));

    let buried = "int x;\nint y;\n\n/* Copyright (C) 2010  Cole Reynolds */\n";
    assert!(detector.has_license(buried));

    assert!(!detector.has_license("int main() {}\n"));
    assert!(!detector.has_license(""));
  }

  #[test]
  fn test_holder_is_escaped() {
    let detector = CopyrightMarkerDetector::new("A.B. (Corp)").unwrap();
    assert!(detector.is_marker_line("// Copyright (C) 2024  A.B. (Corp)"));
    assert!(!detector.is_marker_line("// Copyright (C) 2024  AxBx (Corp)"));
  }
}
