// phishcheck/tests/cli_integration_tests.rs
//! Command-line integration tests for the `phishcheck` binary.
//!
//! The binary is run through `assert_cmd` with stdout/stderr captured. Output
//! is never a terminal here, so no colour is emitted, but ANSI codes are
//! stripped anyway before comparing text.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

fn phishcheck() -> Command {
    let mut cmd = Command::cargo_bin("phishcheck").unwrap();
    cmd.env_remove("PHISHCHECK_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).to_string()
}

#[test]
fn test_url_argument_text_output() -> Result<()> {
    let output = phishcheck().arg("http://192.168.1.1/login").output()?;
    assert!(output.status.success());

    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("RISK SCORE = 6.5"), "{}", stdout);
    assert!(stdout.contains("RESULT = SUSPICIOUS"), "{}", stdout);
    assert!(stdout.contains("ip_address"), "{}", stdout);
    assert!(stdout.contains("suspicious_keywords"), "{}", stdout);
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let output = phishcheck()
        .args(["--json", "http://user@bank-login.com/verify"])
        .output()?;
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["verdict"], "PHISHING");
    assert_eq!(report["score"], 9.5);
    assert_eq!(report["url"], "http://user@bank-login.com/verify");
    assert_eq!(report["features"]["has_at_symbol"], 1);
    assert_eq!(report["features"]["url_length"], 33);
    assert_eq!(report["triggered_rules"].as_array().map(Vec::len), Some(5));
    Ok(())
}

#[test]
fn test_url_from_stdin() {
    phishcheck()
        .write_stdin("http://freebies.xyz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("RISK SCORE = 4.5"))
        .stdout(predicate::str::contains("RESULT = SUSPICIOUS"));
}

#[test]
fn test_legit_url_is_celebrated() {
    phishcheck()
        .arg("https://www.google.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT = LEGIT"))
        .stdout(predicate::str::contains("🎈"));
}

#[test]
fn test_no_input_prompts_for_url() {
    phishcheck()
        .write_stdin("")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Enter the URL"));

    phishcheck()
        .arg("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Enter the URL"));
}

#[test]
fn test_feature_table() -> Result<()> {
    let output = phishcheck().args(["--features", "http://freebies.xyz"]).output()?;
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("--- URL ANALYSIS ---"));
    assert!(stdout.contains("suspicious_tld"));
    assert!(stdout.contains("entropy_score"));
    Ok(())
}

#[test]
fn test_custom_scoring_config() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"weights:\n  no_www_prefix: 0.0\nthresholds:\n  suspicious: 1.0\n  phishing: 2.0\n")?;

    phishcheck()
        .args(["--json", "--config"])
        .arg(file.path())
        .arg("http://freebies.xyz")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"PHISHING\""))
        .stdout(predicate::str::contains("\"score\": 4.0"));
    Ok(())
}

#[test]
fn test_scoring_config_from_environment() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"weights:\n  no_www_prefix: 0.0\n")?;

    phishcheck()
        .env("PHISHCHECK_CONFIG", file.path())
        .arg("www.google.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("RISK SCORE = 0\n"));
    Ok(())
}

#[test]
fn test_invalid_scoring_config_fails() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"weights:\n  not_a_rule: 1.0\n")?;

    phishcheck()
        .arg("--config")
        .arg(file.path())
        .arg("http://example.com")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("Unknown scoring rule 'not_a_rule'"));
    Ok(())
}

#[test]
fn test_missing_theme_file_fails() {
    phishcheck()
        .args(["--theme", "/definitely/not/here.yaml", "http://example.com"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Theme error: Failed to read theme file"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    phishcheck()
        .args(["--debug", "http://192.168.1.1/login"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting phishcheck operation."))
        .stdout(predicate::str::contains("Starting").not());
}
