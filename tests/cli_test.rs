//! Integration tests for CLI argument handling.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_no_args_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("kanji-coverage"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_missing_api_key_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("kanji-coverage"));
    cmd.arg("book.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("API_KEY"));
    Ok(())
}

#[test]
fn cli_extra_argument_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("kanji-coverage"));
    cmd.args(["book.txt", "key", "surplus"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("surplus"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("kanji-coverage"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WaniKani learner"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("kanji-coverage"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}
