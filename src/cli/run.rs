//! # Run Command
//!
//! This module implements the insert and check modes. Insert mode is the
//! default; `--check` switches to reporting only.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use add_copyright::config::load_config;
use add_copyright::diff::DiffManager;
use add_copyright::info_log;
use add_copyright::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use add_copyright::processor::{Processor, ProcessorConfig};
use add_copyright::report::{ProcessingSummary, write_json_report};
use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use crate::output::{print_missing_files, print_planned_files, print_summary};

/// Arguments shared by both modes
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Directory to scan recursively
  #[arg(default_value = ".")]
  pub root: PathBuf,

  /// Only report files missing the header; exit with status 1 if any are
  /// found
  #[arg(long)]
  pub check: bool,

  /// In check mode, print a diff of the header each file would receive
  #[arg(long, requires = "check")]
  pub show_diff: bool,

  /// List the files that would be processed and exit
  #[arg(long, conflicts_with = "check")]
  pub list: bool,

  /// TOML file overriding the built-in patterns, exclusions and header text
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Write a JSON report of every processed file to the given path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and check-mode diagnostics
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run with the given arguments.
///
/// Exits the process with status 1 when check mode finds files without a
/// header.
pub fn run(args: RunArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let config = load_config(args.config.as_deref())?;
  debug!(
    "Using {} comment styles, excluding {:?}",
    config.comment_styles.len(),
    config.exclude_dirs
  );

  let processor = Processor::new(ProcessorConfig {
    check_only: args.check,
    diff_manager: Some(DiffManager::new(args.show_diff)),
    ..ProcessorConfig::new(config)
  })?;

  if args.list {
    let files = processor.collect_planned_files(&args.root)?;
    print_planned_files(&files);
    return Ok(());
  }

  let start_time = Instant::now();
  let reports = processor
    .process(&args.root)
    .with_context(|| format!("Failed to process {}", args.root.display()))?;
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

  info!(
    "Examined {} files: {} with header, {} added, {} missing",
    summary.total, summary.with_header, summary.added, summary.missing
  );

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &reports, &summary)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  let missing = if args.check { print_missing_files(&reports) } else { 0 };
  print_summary(&summary, args.check);

  if missing > 0 {
    process::exit(1);
  }

  Ok(())
}
