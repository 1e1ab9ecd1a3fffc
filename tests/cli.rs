//! Integration tests for CLI commands

use assert_cmd::{assert::OutputAssertExt, cargo::CommandCargoExt};
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn scout_cmd(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scout").unwrap();
    // Keep the test isolated from any real config file
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd
}

#[test]
fn test_main_command_help() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = scout_cmd(&tmp);
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_report_command_help() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = scout_cmd(&tmp);
    cmd.arg("report").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("research question"));
}

#[test]
fn test_report_requires_credentials() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = scout_cmd(&tmp);
    cmd.arg("report")
        .arg("How can RAG reduce hallucinations?")
        .env_remove("TAVILY_API_KEY")
        .env_remove("GEMINI_API_KEY");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing credential"));
}

#[test]
fn test_report_rejects_whitespace_query_before_any_call() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = scout_cmd(&tmp);
    // Dummy keys: validation fails before anything is sent anywhere
    cmd.arg("report")
        .arg("   ")
        .env("TAVILY_API_KEY", "test-key")
        .env("GEMINI_API_KEY", "test-key");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("query must not be empty"));
}
