#![allow(dead_code)]

use std::fs;
use std::path::Path;

use add_copyright::config::Config;
use add_copyright::header::Header;
use anyhow::{Context, Result};

/// Writes `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads `relative` under `root` as a string.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// The header the default configuration renders for `//` files.
pub fn default_header() -> String {
  Header::from_config(&Config::default()).render("//")
}

/// Builds a small C++ tree with a mix of headered, unheadered and excluded
/// files.
///
/// Missing headers: `a.cpp`, `src/b.hpp`, `src/tool.cpp`.
pub fn create_source_tree(root: &Path) -> Result<()> {
  write_file(root, "a.cpp", "int main() {}\n")?;
  write_file(root, "src/b.hpp", "#pragma once\n")?;
  write_file(root, "src/tool.cpp", "#!/usr/bin/env xyz\nint x;\n")?;
  write_file(
    root,
    "src/done.cpp",
    &format!("{}int done;\n", default_header().replace("2024", "2019")),
  )?;
  write_file(root, "README.md", "not a source file\n")?;
  write_file(root, "extern/vendor.cpp", "int vendor;\n")?;
  write_file(root, "build-debug/gen.hpp", "int gen;\n")?;
  write_file(root, "src/assets/embedded.cpp", "int asset;\n")?;
  write_file(root, "src/config/settings.hpp", "int setting;\n")?;
  Ok(())
}
