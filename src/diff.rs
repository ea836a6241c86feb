//! # Diff Module
//!
//! This module renders line diffs between a file's current content and the
//! content insert mode would write. Check mode uses it for `--show-diff`.

use std::path::Path;

use similar::{ChangeTag, TextDiff};

/// Manages diff rendering for header changes.
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,
}

impl DiffManager {
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Prints the diff between `original` and `new` to stderr if diffs are
  /// enabled.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) {
    if self.show_diff {
      eprint!("{}", render_diff(path, original, new));
    }
  }
}

/// Renders a line diff with `+`, `-` and ` ` markers under a
/// `Diff for <path>:` heading.
pub fn render_diff(path: &Path, original: &str, new: &str) -> String {
  let diff = TextDiff::from_lines(original, new);

  let mut diff_content = format!("Diff for {}:\n", path.display());

  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    diff_content.push_str(sign);
    diff_content.push_str(change.value());
    if change.missing_newline() {
      diff_content.push('\n');
    }
  }

  diff_content
}
