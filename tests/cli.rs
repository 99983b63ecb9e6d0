//! Integration test: command-line surface of the binary
//!
//! Only paths that exit before the terminal is taken over are exercised
//! here; the interactive loop is covered by the e2e smoke tests.

use std::process::{Command, Output};

fn ubrowse(args: &[&str]) -> Output {
    let home = std::env::temp_dir().join("ubrowse-cli-test-home");
    Command::new(env!("CARGO_BIN_EXE_ubrowse"))
        .args(args)
        .env_remove("UBROWSE_CONFIG")
        .env_remove("UBROWSE_ACCENT")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn binary_prints_version() {
    let output = ubrowse(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected version {}, got: {stdout}",
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn help_describes_start_value() {
    let output = ubrowse(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--noaccent"));
    assert!(stdout.contains("hex codepoint value"));
}

#[test]
fn unknown_start_value_fails_before_drawing() {
    let output = ubrowse(&["zzzznotaname"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Invalid start value: \"zzzznotaname\"."),
        "got: {stderr}"
    );
    assert!(stderr.contains("--help"));
}

#[test]
fn invalid_accent_fails_before_drawing() {
    let output = ubrowse(&["--accent", "xyz", "A"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid accent character value"), "got: {stderr}");
}

#[test]
fn unknown_flag_is_rejected() {
    let output = ubrowse(&["--frobnicate"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--frobnicate"));
}
