//! Tests for error reporting and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("chiffre") || out.contains("Usage"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "chiffre");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_method_fails() {
    let t = Test::new();

    let output = t.encode("caesar", "HELLO", None);
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown method");
}

#[test]
fn test_key_too_long() {
    let t = Test::new();

    let output = t.encode("vigenere", "HI", Some("LONGKEY"));
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "key has 7 letters but the text only has 2");
    assert_stderr_contains(&output, "use a key of at most 2 letters");
}

#[test]
fn test_empty_key() {
    let t = Test::new();

    let output = t.encode("vigenere", "HELLO", Some("1234"));
    assert_failure(&output);
    assert_stderr_contains(&output, "key contains no letters");
}

#[test]
fn test_missing_key() {
    let t = Test::new();

    let output = t.encode("vigenere", "HELLO", None);
    assert_failure(&output);
    assert_stderr_contains(&output, "vigenere expects a letter key, got no key");
}

#[test]
fn test_key_given_to_polybe() {
    let t = Test::new();

    let output = t.encode("polybe", "HELLO", Some("3"));
    assert_failure(&output);
    assert_stderr_contains(&output, "polybe expects no key, got a numeric key");
    assert_stderr_contains(&output, "drop --key");
}

#[test]
fn test_invalid_numeric_key() {
    let t = Test::new();

    let output = t.encode("bazeries", "HELLO", Some("three"));
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid numeric key");
}

#[test]
fn test_non_positive_key() {
    let t = Test::new();

    let output = t.encode("bazeries", "HELLO", Some("0"));
    assert_failure(&output);
    assert_stderr_contains(&output, "numeric key must be positive, got 0");

    let output = t.encode("bazeries", "HELLO", Some("-2"));
    assert_failure(&output);
    assert_stderr_contains(&output, "got -2");
}

#[test]
fn test_key_too_large() {
    let t = Test::new();

    let output = t.encode("bazeries", "HELLO", Some("6"));
    assert_failure(&output);
    assert_stderr_contains(&output, "numeric key 6 exceeds the 5 letters of the text");
}

#[test]
fn test_empty_input() {
    let t = Test::new();

    let output = t.encode("polybe", "1234 ?!", None);
    assert_failure(&output);
    assert_stderr_contains(&output, "text contains no letters");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_chiffre") || out.contains("complete"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert!(!stdout(&output).is_empty());
}

#[test]
fn test_failure_leaves_stdout_empty() {
    let t = Test::new();

    t.cmd()
        .args(["decode", "bazeries", "QNUUX", "--key", "0"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✗"));
}

#[test]
fn test_unknown_method_lists_supported() {
    let t = Test::new();

    t.cmd()
        .args(["encode", "caesar", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Supported: vigenere, polybe, bazeries"));
}
