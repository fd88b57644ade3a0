//! Integration tests for the loanscreen CLI
//!
//! These drive the built binary with piped stdin, so command keys are read a
//! line at a time.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a loanscreen command with colors off
fn loanscreen() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("loanscreen"));
    cmd.arg("--no-color");
    cmd
}

/// Helper to write a settings file and return its directory
fn settings_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    loanscreen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "loanscreen {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_help() {
    loanscreen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("loan-to-value"));
}

#[test]
fn test_empty_input_exits_cleanly() {
    loanscreen()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, welcome to credit assessment program"));
}

// =============================================================================
// END-TO-END SESSIONS
// =============================================================================

/// Evaluate two applications, show the report, exit
#[test]
fn test_e2e_evaluate_report_exit() {
    loanscreen()
        .write_stdin("\n500000\n1000000\n800\n\n1,000,000\n2000000\n900\nr\nx\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Application is eligible for loan with LTV:50.00"))
        .stdout(predicate::str::contains(
            "Unfortunately application doesn't meet eligibility criteria, LTV: 50.00",
        ))
        .stdout(predicate::str::contains("Detailed report of all eligibility checks performed"))
        .stdout(predicate::str::contains("| 1000000 "))
        .stdout(predicate::str::contains("| Mean Average LTV of All Applications |"))
        .stdout(predicate::str::contains("Thank you for using our app and have a nice day"));
}

#[test]
fn test_report_before_evaluation() {
    loanscreen()
        .write_stdin("r\nx\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No reports available."))
        .stdout(predicate::str::contains("Loan Amount").not());
}

#[test]
fn test_invalid_values_are_reprompted() {
    loanscreen()
        .write_stdin("\nten\n500000\n1000000\n1200\n800\nx\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong value, loan value must be numeric."))
        .stdout(predicate::str::contains(
            "Wrong value, credit score must be between 1 and 999 inclusive.",
        ))
        .stdout(predicate::str::contains("Application is eligible for loan with LTV:50.00"));
}

#[test]
fn test_json_report() {
    loanscreen()
        .arg("--json")
        .write_stdin("\n500000\n1000000\n800\nr\nx\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rule\": \"ltv_below_60\""))
        .stdout(predicate::str::contains("\"mean_ltv\": \"50.00\""));
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[test]
fn test_zero_asset_value_exits_with_error() {
    loanscreen()
        .write_stdin("\n500000\n0\n800\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("loan-to-value is undefined"));
}

#[test]
fn test_input_closed_mid_form_fails() {
    loanscreen()
        .write_stdin("\n500000\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

// =============================================================================
// SETTINGS
// =============================================================================

#[test]
fn test_currency_from_settings() {
    let (_temp, path) = settings_file("[display]\ncurrency = \"EUR\"\n");

    loanscreen()
        .arg("--config")
        .arg(&path)
        .write_stdin("\n500000\n1000000\n800\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please type in required loan value (EUR):"));
}

#[test]
fn test_missing_settings_file_fails() {
    let temp = TempDir::new().unwrap();

    loanscreen()
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load settings"));
}

#[test]
fn test_malformed_settings_file_fails() {
    let (_temp, path) = settings_file("display = [");

    loanscreen()
        .arg("--config")
        .arg(&path)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings file"));
}
