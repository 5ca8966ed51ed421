//! CLI argument parser for model-deletedir
//!
//! Provides type-safe argument parsing using clap derive.

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for model-deletedir
#[derive(Parser, Debug)]
#[command(
    name = "model-deletedir",
    version,
    about = "Delete a model directory or model version directory after checking its layout",
    long_about = "Recursively deletes PATH only if it looks like a model directory\n\
                  (timestamp-named versions) or a model version directory (only\n\
                  evaluation/, execution/ and testing/ inside).\n\
                  Anything else is left untouched. A missing PATH is not an error."
)]
pub struct CliArgs {
    // Optional here so a missing argument exits with 1, not clap's 2.
    // Parsed as OsString because the PathBuf parser rejects "", which is
    // a path that does not exist (exit 0).
    /// Model directory or model version directory to delete
    #[arg(value_name = "PATH", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub path: Option<PathBuf>,

    /// Dry run mode (validate and show what would be deleted)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Report the outcome, including why a directory was not deleted
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
