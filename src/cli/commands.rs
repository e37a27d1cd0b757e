//! Scan command
//!
//! Load, parse, validate, count, then print a single result line on
//! stdout. Diagnostics go to stderr through the structured logger.

use std::io::{self, Write};
use std::path::Path;

use crate::observability::{log_event, Event, Logger};
use crate::passport::{parse_record, scan, PassportLoader, Policy, Record, ScanReport};

use super::args::Cli;
use super::config::Config;
use super::errors::CliResult;

/// Parse arguments and run a scan with the given policy
pub fn run(policy: Policy) -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(cli.config.as_deref(), cli.log_level)?;
    let logger = Logger::new(config.log_level);

    let stdout = io::stdout();
    run_scan(&cli.input_file, policy, &logger, &mut stdout.lock())?;
    Ok(())
}

/// Scan one batch file and write the result line to `out`
pub fn run_scan<W: Write>(
    input: &Path,
    policy: Policy,
    logger: &Logger,
    out: &mut W,
) -> CliResult<ScanReport> {
    let input_display = input.display().to_string();
    log_event(
        logger,
        Event::ScanStart,
        &[("input", input_display.as_str()), ("policy", policy.name())],
    );

    let blocks = PassportLoader::new(input).load()?;
    log_event(
        logger,
        Event::InputLoaded,
        &[("blocks", blocks.len().to_string().as_str())],
    );

    let records: Vec<Record> = blocks.iter().map(|block| parse_record(block)).collect();

    let report = scan(&records, policy, |index, rejection| {
        log_event(
            logger,
            Event::RecordRejected,
            &[
                ("field", rejection.field().key()),
                ("reason", rejection.reason()),
                ("record", index.to_string().as_str()),
            ],
        );
    });

    log_event(
        logger,
        Event::ScanComplete,
        &[
            ("rejected", report.rejected().to_string().as_str()),
            ("total", report.total.to_string().as_str()),
            ("valid", report.valid.to_string().as_str()),
        ],
    );

    writeln!(out, "{}", format_result(report.valid))?;
    out.flush()?;

    Ok(report)
}

/// The human-readable result line
pub fn format_result(valid: usize) -> String {
    format!("Found {} valid passports in the input data.", valid)
}
