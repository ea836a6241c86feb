//! # Header Module
//!
//! This module composes the copyright header written into source files.
//!
//! A header is three blocks of text (program identity, copyright line and
//! license body) turned into line comments with a single prefix token. The
//! rendered text depends only on the prefix, so it is produced once per
//! comment style and reused for every file of that style.
//!
//! ## Example
//!
//! ```rust
//! use add_copyright::config::Config;
//! use add_copyright::header::Header;
//!
//! let header = Header::from_config(&Config::default());
//! let text = header.render("//");
//!
//! assert!(text.starts_with("// hera\n// Copyright (C) 2024  Cole Reynolds\n//\n"));
//! assert!(text.ends_with("<https://www.gnu.org/licenses/>.\n\n"));
//! ```

use crate::config::Config;

/// The uncommented text blocks of a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
  /// Program identity line
  program_name: String,
  /// Copyright line, e.g. `Copyright (C) 2024  Cole Reynolds`
  copyright: String,
  /// License body, possibly spanning many lines
  license: String,
}

impl Header {
  pub fn new(program_name: impl Into<String>, copyright: impl Into<String>, license: impl Into<String>) -> Self {
    Self {
      program_name: program_name.into(),
      copyright: copyright.into(),
      license: license.into(),
    }
  }

  /// Builds the header described by a configuration.
  pub fn from_config(config: &Config) -> Self {
    Self::new(&config.program_name, config.copyright_line(), &config.license)
  }

  /// Renders the header as line comments.
  ///
  /// The identity and copyright lines are each followed by one line
  /// terminator; the license body is followed by two, leaving a blank line
  /// between the header and whatever comes after it.
  ///
  /// # Parameters
  ///
  /// * `prefix` - Line-comment token, without the trailing space (e.g. `//`)
  pub fn render(&self, prefix: &str) -> String {
    let mut rendered = String::with_capacity(self.program_name.len() + self.copyright.len() + self.license.len() * 2);

    rendered.push_str(&comment(&self.program_name, prefix));
    rendered.push('\n');
    rendered.push_str(&comment(&self.copyright, prefix));
    rendered.push('\n');
    rendered.push_str(&comment(&self.license, prefix));
    rendered.push_str("\n\n");

    rendered
  }

  /// The start of a commented identity line, `<prefix> <program name>`.
  pub fn identity_marker(&self, prefix: &str) -> String {
    format!("{} {}", prefix, self.program_name)
  }
}

/// Comments out `text` one line at a time.
///
/// Every line is prefixed by `prefix` and a space, then trailing whitespace
/// is trimmed, so an empty line becomes the bare prefix.
pub fn comment(text: &str, prefix: &str) -> String {
  text
    .split('\n')
    .map(|line| format!("{} {}", prefix, line).trim_end().to_string())
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_comment_single_line() {
    assert_eq!(comment("hera", "//"), "// hera");
    assert_eq!(comment("hera", "#"), "# hera");
  }

  #[test]
  fn test_comment_blank_lines_become_bare_prefix() {
    assert_eq!(comment("", "//"), "//");
    assert_eq!(comment("first\n\nthird", "//"), "// first\n//\n// third");
  }

  #[test]
  fn test_comment_trims_trailing_whitespace() {
    assert_eq!(comment("text   \n   ", "--"), "-- text\n--");
  }

  #[test]
  fn test_render_layout() {
    let header = Header::new("prog", "Copyright (C) 2020  Someone", "\nLine one\n\nLine two");
    assert_eq!(
      header.render("//"),
      "// prog\n// Copyright (C) 2020  Someone\n//\n// Line one\n//\n// Line two\n\n"
    );
  }

  #[test]
  fn test_render_default_license_has_no_trailing_whitespace() {
    let rendered = Header::from_config(&Config::default()).render("//");

    for line in rendered.lines() {
      assert_eq!(line, line.trim_end(), "trailing whitespace in {:?}", line);
      assert!(line.is_empty() || line == "//" || line.starts_with("// "), "bad line {:?}", line);
    }

    assert!(rendered.contains("\n// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the\n"));
    assert_eq!(rendered.lines().filter(|line| *line == "//").count(), 3);
  }

  #[test]
  fn test_identity_marker() {
    let header = Header::from_config(&Config::default());
    assert_eq!(header.identity_marker("//"), "// hera");
  }
}
