//! # add-copyright
//!
//! A tool that walks a source tree and makes sure every matching file starts
//! with the project's copyright and license header.
//!
//! Headers are placed after any leading blank lines and shebang, written as
//! line comments with a per-pattern prefix, and never inserted twice: a file
//! that already contains a copyright line for the configured holder is left
//! untouched. A check-only mode reports the files that lack a header without
//! modifying anything.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use add_copyright::config::Config;
//! use add_copyright::processor::{Processor, ProcessorConfig};
//! use add_copyright::report::FileAction;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Check-only run over the current directory with the built-in settings
//!     let processor = Processor::new(ProcessorConfig {
//!         check_only: true,
//!         ..ProcessorConfig::new(Config::default())
//!     })?;
//!
//!     let reports = processor.process(Path::new("."))?;
//!     for report in reports.iter().filter(|r| r.action == FileAction::Missing) {
//!         println!("{} is missing a header", report.path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walking the tree, checking and updating files
//! * [`header`] - Rendering the header for a comment prefix
//! * [`config`] - The fixed configuration and its TOML overrides
//! * [`logging`] - Logging utilities for verbose output

pub mod config;
pub mod diff;
pub mod header;
pub mod license_detection;
pub mod logging;
pub mod processor;
pub mod report;
