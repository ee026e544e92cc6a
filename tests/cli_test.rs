//! Integration tests for the cliptools binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn cliptools() -> Command {
    let mut cmd = Command::new(cargo_bin("cliptools"));
    cmd.env_remove("CLIPTOOLS_DEBUG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bulk"))
        .stdout(predicate::str::contains("comments"))
        .stdout(predicate::str::contains("titles"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn bulk_from_input_flag() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["bulk", "--input", "1\n2\n3", ",-n"])
        .assert()
        .success()
        .stdout("1,2,3,\n");
    Ok(())
}

#[test]
fn bulk_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["bulk", "'，"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stdout("'1',\n'2',\n'3',\n");
    Ok(())
}

#[test]
fn bulk_hyphen_command_after_separator() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["bulk", "--input", "1,，\n2，,\n3,", "--", "-，"])
        .assert()
        .success()
        .stdout("1\n2\n3\n");
    Ok(())
}

#[test]
fn bulk_explain_writes_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["bulk", "--explain", "--input", "a", "\","])
        .assert()
        .success()
        .stdout("\"a\",\n")
        .stderr(predicate::str::contains("quote: add double"))
        .stderr(predicate::str::contains("comma: add"));
    Ok(())
}

#[test]
fn bulk_explain_survives_quiet() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["bulk", "--quiet", "--explain", "--input", "a", ","])
        .assert()
        .success()
        .stdout("a,\n")
        .stderr(predicate::str::contains("comma: add"))
        .stderr(predicate::str::contains("wrap: newline"));
    Ok(())
}

#[test]
fn debug_env_accepts_numeric_values() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .env("CLIPTOOLS_DEBUG", "1")
        .args(["bulk", "--input", "a", ","])
        .assert()
        .success()
        .stdout("a,\n")
        .stderr(predicate::str::contains("cliptools starting"));
    Ok(())
}

#[test]
fn debug_env_zero_keeps_debug_off() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .env("CLIPTOOLS_DEBUG", "0")
        .args(["bulk", "--input", "a", ","])
        .assert()
        .success()
        .stdout("a,\n")
        .stderr(predicate::str::contains("cliptools starting").not());
    Ok(())
}

#[test]
fn comments_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .arg("comments")
        .write_stdin("{\n  // note\n  \"a\": 1, // one\n}\n")
        .assert()
        .success()
        .stdout("{\n  # note\n  \"a\": 1,  # one\n}\n");
    Ok(())
}

#[test]
fn titles_from_input_flag() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["titles", "--input", "# Title\ntext"])
        .assert()
        .success()
        .stdout("## Title\n\ntext\n");
    Ok(())
}

#[test]
fn behaviors_json() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["behaviors", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"quote\""))
        .stdout(predicate::str::contains("\"priority\": 3"));
    Ok(())
}

#[test]
fn behaviors_table() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .arg("behaviors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Behavior"))
        .stdout(predicate::str::contains("no newline"));
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cliptools"));
    Ok(())
}

#[test]
fn input_and_clipboard_conflict() -> Result<(), Box<dyn std::error::Error>> {
    cliptools()
        .args(["bulk", "--input", "x", "--clipboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    Ok(())
}
