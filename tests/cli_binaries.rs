//! CLI Binary Tests
//!
//! Runs both binaries against real files:
//! - Result line on stdout
//! - Non-zero exit and empty stdout on unreadable input

use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const TWO_RECORDS: &str = "byr:1, iyr:2\n\nbyr:3 iyr:4 eyr:5 hgt:6 hcl:7 ecl:8 pid:9";

fn run<S: AsRef<OsStr>>(bin: &str, args: &[S]) -> Output {
    Command::new(bin).args(args).output().unwrap()
}

fn write_batch(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("batch.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_presence_binary_reports_count() {
    let tmp = TempDir::new().unwrap();
    let path = write_batch(&tmp, TWO_RECORDS);

    let output = run(env!("CARGO_BIN_EXE_passport-presence"), &[&path]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Found 1 valid passports in the input data.\n"
    );
}

#[test]
fn test_strict_binary_reports_count() {
    let tmp = TempDir::new().unwrap();
    let path = write_batch(&tmp, TWO_RECORDS);

    let output = run(env!("CARGO_BIN_EXE_passport-strict"), &[&path]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Found 0 valid passports in the input data.\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("absent.txt");

    for bin in [
        env!("CARGO_BIN_EXE_passport-presence"),
        env!("CARGO_BIN_EXE_passport-strict"),
    ] {
        let output = run(bin, &[&missing]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("PASSPORT_CLI_INPUT_ERROR"));
        assert_eq!(stderr.lines().count(), 1, "error reported once: {stderr}");
    }
}

#[test]
fn test_trace_logging_stays_on_stderr() {
    let tmp = TempDir::new().unwrap();
    let path = write_batch(&tmp, TWO_RECORDS);

    let output = Command::new(env!("CARGO_BIN_EXE_passport-strict"))
        .arg(&path)
        .args(["--log-level", "trace"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Found 0 valid passports in the input data.\n"
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events.first().unwrap()["event"], "SCAN_START");
    assert_eq!(events.last().unwrap()["event"], "SCAN_COMPLETE");
    assert_eq!(events.last().unwrap()["rejected"], "2");
    assert_eq!(
        events.iter().filter(|e| e["event"] == "RECORD_REJECTED").count(),
        2
    );
}
