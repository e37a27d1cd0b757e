//! CLI argument definitions using clap
//!
//! Usage:
//! - passport-presence <INPUT_FILE> [--config <path>] [--log-level <level>]
//! - passport-strict <INPUT_FILE> [--config <path>] [--log-level <level>]

use clap::Parser;
use std::path::PathBuf;

use crate::observability::Severity;

/// Count valid passports in a batch file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The file to process
    pub input_file: PathBuf,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum severity written to stderr (trace, info, warn, error)
    #[arg(long)]
    pub log_level: Option<Severity>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
