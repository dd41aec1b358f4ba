//! Integration tests for the fillseq binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("fillseq").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fillseq"))
        .stdout(predicate::str::contains("control variable"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("fillseq").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_runs_flawed_then_corrected() {
    let mut cmd = Command::cargo_bin("fillseq").unwrap();
    cmd.write_stdin("1\n2\n3\n5\n\nabc\n7\n9\n");

    let output = cmd.output().expect("fillseq should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let flawed_at = stdout
        .find("Problematic example")
        .expect("flawed heading missing");
    let corrected_at = stdout
        .find("Corrected example")
        .expect("corrected heading missing");
    assert!(flawed_at < corrected_at, "flawed section must run first");

    // Flawed section consumed the first three values.
    assert!(stdout.contains("Sequence length: 3"));
    assert!(stdout.contains("The value in 0 is 1."));
    assert!(stdout.contains("The value in 2 is 3."));

    // Corrected section absorbed the empty and non-numeric lines, then
    // reported the three valid values.
    assert!(stdout.contains("The value in 0 is 5."));
    assert!(stdout.contains("The value in 1 is 7."));
    assert!(stdout.contains("The value in 2 is 9."));

    let diagnostics = stdout
        .lines()
        .filter(|line| {
            *line == "Empty input: enter a number or type 'quit' to cancel."
                || *line == "Conversion failed: try again or type 'quit' to cancel."
        })
        .count();
    assert_eq!(diagnostics, 2, "one diagnostic per rejected line:\n{stdout}");
}

#[test]
fn test_closed_stdin_exits_orderly() {
    // No input at all: the flawed section drains to zeros, the corrected
    // section reports cancellation, and the process still exits cleanly.
    let mut cmd = Command::cargo_bin("fillseq").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The value in 0 is 0."))
        .stdout(predicate::str::contains(
            "No input available (end of stream), cancelling.",
        ))
        .stdout(predicate::str::contains("Input cancelled: end of input."));
}

#[test]
fn test_quit_token_cancels_cleanly() {
    let mut cmd = Command::cargo_bin("fillseq").unwrap();
    cmd.write_stdin("1\n2\n3\nQuit\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Input cancelled: user requested."));
}

#[test]
fn test_config_file_sets_the_length() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("demo.toml");
    std::fs::write(&config_path, "[demo]\nlength = 2\n").unwrap();

    let mut cmd = Command::cargo_bin("fillseq").unwrap();
    cmd.arg("--config").arg(&config_path);
    cmd.write_stdin("1\n2\n3\n4\n");

    let output = cmd.output().expect("fillseq should run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Sequence length: 2"));
    assert!(stdout.contains("The value in 1 is 4."));
    assert!(!stdout.contains("The value in 2 is"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("demo.toml");
    std::fs::write(&config_path, "[demo]\nlength = 0\n").unwrap();

    let mut cmd = Command::cargo_bin("fillseq").unwrap();
    cmd.arg("--config").arg(&config_path);
    cmd.assert().failure();
}
