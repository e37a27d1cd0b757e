//! CLI module
//!
//! Shared by both binaries; each binary fixes the validation policy:
//! - passport-presence: required fields present
//! - passport-strict: required fields present and well-formed

mod args;
mod commands;
mod config;
mod errors;

pub use args::Cli;
pub use commands::{format_result, run, run_scan};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
