//! Tests for the config file.

use crate::support::*;

#[test]
fn test_config_preserve_mode() {
    let t = Test::new();
    let path = t.write_config("[chiffre]\nmode = \"preserve\"\n");

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args(["encode", "vigenere", "Attack at dawn!", "--key", "LEMON"])
        .output()
        .unwrap();
    assert_payload(&output, "LXFOPV EF RNHR!");
}

#[test]
fn test_config_from_env_var() {
    let t = Test::new();
    let path = t.write_config("[chiffre]\njson = true\n");

    let output = t
        .cmd()
        .env("CHIFFRE_CONFIG", &path)
        .args(["encode", "polybe", "BACK"])
        .output()
        .unwrap();
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["output"], POLYBE_CODED);
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location() {
    let t = Test::new();
    t.write_default_config("[chiffre]\nmode = \"preserve\"\n");

    let output = t.encode("bazeries", "Hi, you", Some("1"));
    assert_payload(&output, "IJ, ZPV");
}

#[test]
fn test_missing_config_file_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "does-not-exist.toml", "methods"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
}

#[test]
fn test_invalid_mode_fails_with_hint() {
    let t = Test::new();
    let path = t.write_config("[chiffre]\nmode = \"loose\"\n");

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args(["encode", "polybe", "BACK"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid value for `mode`: loose");
    assert_stderr_contains(&output, "strict");
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    let path = t.write_config("[chiffre\nmode = ");

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args(["encode", "polybe", "BACK"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_completions_ignore_broken_config() {
    let t = Test::new();
    let path = t.write_config("not toml at all [");

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args(["completions", "fish"])
        .output()
        .unwrap();
    assert_success(&output);
}
