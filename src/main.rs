//! # add-copyright
//!
//! A tool that ensures source files start with the project's copyright
//! header.

mod cli;
mod output;

use anyhow::Result;

use crate::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run(cli.run_args)
}
