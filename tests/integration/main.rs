//! Integration tests for the bankocr CLI
//!
//! These tests run the binary against real scan files and check the exact
//! result lines it produces.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a bankocr command
fn bankocr() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("bankocr"));
    cmd.env_remove("RUST_LOG");
    cmd
}

const SCAN: &str = "\
\x20_  _  _  _  _  _  _  _  _ \n\
| || || || || || || || || |\n\
|_||_||_||_||_||_||_||_||_|\n\
\n\
\x20                          \n\
\x20 |  |  |  |  |  |  |  |  |\n\
\x20 |  |  |  |  |  |  |  |  |\n\
\n\
\x20   _  _     _  _  _  _  _ \n\
\x20 | _| _||_||_ |_   ||_||_|\n\
\x20 ||_  _|  | _||_|  ||_|  |\n\
\n";

const EXPECTED: &str = "000000000 \n111111111 ERR\n12345678? ILL\n";

/// Write the sample scan into a fresh directory
fn scan_file() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("accounts.txt");
    fs::write(&path, SCAN).unwrap();
    (temp, path)
}

#[test]
fn test_version() {
    bankocr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bankocr"));
}

#[test]
fn test_help() {
    bankocr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("OCR scans of bank account numbers"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    bankocr()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bankocr v"));
}

#[test]
fn test_scan_to_stdout() {
    let (temp, path) = scan_file();
    bankocr()
        .current_dir(temp.path())
        .arg("scan")
        .arg(&path)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_scan_to_file() {
    let (temp, path) = scan_file();
    let results = temp.path().join("results.txt");

    bankocr()
        .current_dir(temp.path())
        .arg("scan")
        .arg(&path)
        .arg(&results)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(results).unwrap(), EXPECTED);
}

#[test]
fn test_scan_json() {
    let (temp, path) = scan_file();
    let output = bankocr()
        .current_dir(temp.path())
        .args(["--json", "scan"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["status"], "valid");
    assert_eq!(lines[1]["checksum"], 1);
    assert_eq!(lines[2]["account_number"], "12345678?");
    assert!(lines[2]["checksum"].is_null());
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();
    bankocr()
        .current_dir(temp.path())
        .args(["scan", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be found"));
}

#[test]
fn test_scan_requires_input() {
    bankocr().arg("scan").assert().failure();
}

#[test]
fn test_check_numbers() {
    let temp = TempDir::new().unwrap();
    bankocr()
        .current_dir(temp.path())
        .args(["check", "457508000", "664371495", "86110??36"])
        .assert()
        .success()
        .stdout("457508000 \n664371495 ERR\n86110??36 ILL\n");
}

#[test]
fn test_strict_width_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("wide.txt");
    fs::write(
        &path,
        "    _  _     _  _  _  _  _ \n  | _| _||_||_ |_   ||_||_| x\n  ||_  _|  | _||_|  ||_| _|\n\n",
    )
    .unwrap();

    bankocr()
        .current_dir(temp.path())
        .args(["scan"])
        .arg(&path)
        .assert()
        .success()
        .stdout("123456789 \n");

    bankocr()
        .current_dir(temp.path())
        .args(["scan", "--strict-width"])
        .arg(&path)
        .assert()
        .success()
        .stdout("12345678? ILL\n");
}

#[test]
fn test_project_config_sets_json() {
    let (temp, path) = scan_file();
    fs::write(temp.path().join("bankocr.toml"), "[output]\nformat = \"json\"\n").unwrap();

    bankocr()
        .current_dir(temp.path())
        .arg("scan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"account_number\":\"000000000\""));
}

#[test]
fn test_explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    bankocr()
        .current_dir(temp.path())
        .args(["--config", "missing.toml", "check", "000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
