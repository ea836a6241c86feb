//! # Configuration Module
//!
//! This module holds the fixed configuration that drives a run: which
//! directories are pruned from the walk, which files get which comment
//! prefix, and the text of the header itself.
//!
//! [`Config::default`] carries the project's constants. A TOML file passed
//! with `--config` may override any of them; keys that are left out keep
//! their default values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::header::comment;
use crate::license_detection::{CopyrightMarkerDetector, LicenseDetector};
use crate::verbose_log;

/// Program identity written on the first line of every header.
pub const PROGRAM_NAME: &str = "hera";

/// Year written into the copyright line.
pub const COPYRIGHT_YEAR: &str = "2024";

/// Holder named in the copyright line and matched by the marker pattern.
pub const COPYRIGHT_HOLDER: &str = "Cole Reynolds";

/// Directory name globs that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["extern", "build*", "assets", "config"];

/// License body. The leading empty line renders as a bare comment prefix
/// between the copyright line and the notice.
pub const LICENSE_BODY: &str = "
This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.";

/// A filename glob paired with the line-comment prefix used for matching
/// files.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CommentStyle {
  /// Glob matched against a file's base name (e.g. `*.cpp`).
  pub pattern: String,

  /// Line-comment token, without the trailing space (e.g. `//`).
  pub prefix: String,
}

impl CommentStyle {
  pub fn new(pattern: &str, prefix: &str) -> Self {
    Self {
      pattern: pattern.to_string(),
      prefix: prefix.to_string(),
    }
  }
}

/// Process-wide configuration for a run.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Program identity line.
  pub program_name: String,

  /// Year used when composing the copyright line.
  pub copyright_year: String,

  /// Copyright holder; also the exact text the marker pattern looks for.
  pub copyright_holder: String,

  /// Multi-line license body.
  pub license: String,

  /// Directory name globs pruned from the walk.
  pub exclude_dirs: Vec<String>,

  /// Files to process and the comment prefix for each.
  pub comment_styles: Vec<CommentStyle>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      program_name: PROGRAM_NAME.to_string(),
      copyright_year: COPYRIGHT_YEAR.to_string(),
      copyright_holder: COPYRIGHT_HOLDER.to_string(),
      license: LICENSE_BODY.to_string(),
      exclude_dirs: EXCLUDED_DIRS.iter().map(|dir| dir.to_string()).collect(),
      comment_styles: vec![CommentStyle::new("*.hpp", "//"), CommentStyle::new("*.cpp", "//")],
    }
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value in the configuration is unusable.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a TOML file, filling omitted keys from the
  /// defaults.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    verbose_log!("Loaded {} comment styles", config.comment_styles.len());

    Ok(config)
  }

  /// The copyright line as it appears (uncommented) in the header.
  pub fn copyright_line(&self) -> String {
    format!("Copyright (C) {}  {}", self.copyright_year, self.copyright_holder)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - The program name and copyright holder are non-empty single lines
  /// - The copyright year is a run of ASCII digits
  /// - Every comment prefix is non-empty
  /// - Every file and directory glob compiles
  /// - The rendered copyright line is recognized as a marker, for every
  ///   comment prefix
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.program_name.trim().is_empty() {
      return Err(invalid("program-name", "cannot be empty"));
    }
    if is_multiline(&self.program_name) {
      return Err(invalid("program-name", "must be a single line"));
    }

    if self.copyright_holder.trim().is_empty() {
      return Err(invalid("copyright-holder", "cannot be empty"));
    }
    if is_multiline(&self.copyright_holder) {
      return Err(invalid("copyright-holder", "must be a single line"));
    }

    if self.copyright_year.is_empty() || !self.copyright_year.bytes().all(|b| b.is_ascii_digit()) {
      return Err(invalid(
        "copyright-year",
        &format!("'{}' is not a year made of digits only", self.copyright_year),
      ));
    }

    for style in &self.comment_styles {
      if style.prefix.trim().is_empty() {
        return Err(invalid(
          "comment-styles",
          &format!("prefix for '{}' cannot be empty", style.pattern),
        ));
      }
      if let Err(e) = glob::Pattern::new(&style.pattern) {
        return Err(invalid("comment-styles", &format!("bad pattern '{}': {}", style.pattern, e)));
      }
    }

    for dir in &self.exclude_dirs {
      if let Err(e) = glob::Pattern::new(dir) {
        return Err(invalid("exclude-dirs", &format!("bad pattern '{}': {}", dir, e)));
      }
    }

    self.validate_marker_round_trip()
  }

  /// A header whose copyright line the detector cannot see would be inserted
  /// again on every run.
  fn validate_marker_round_trip(&self) -> Result<(), ConfigError> {
    let detector = CopyrightMarkerDetector::new(&self.copyright_holder)
      .map_err(|e| invalid("copyright-holder", &format!("{:#}", e)))?;
    let copyright_line = self.copyright_line();

    for style in &self.comment_styles {
      if !detector.is_marker_line(&comment(&copyright_line, &style.prefix)) {
        return Err(invalid(
          "copyright-holder",
          &format!(
            "'{}' is not recognized as an existing header once written with prefix '{}'",
            copyright_line, style.prefix
          ),
        ));
      }
    }

    Ok(())
  }
}

fn is_multiline(value: &str) -> bool {
  value.contains(['\n', '\r'])
}

fn invalid(key: &str, message: &str) -> ConfigError {
  ConfigError::InvalidValue {
    key: key.to_string(),
    message: message.to_string(),
  }
}

/// Resolve the configuration for a run: the file at `path` if one was given,
/// the built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
  match path {
    Some(path) => Config::load(path),
    None => Ok(Config::default()),
  }
}
