//! Tests for `chiffre methods`.

use crate::support::*;

#[test]
fn test_methods_lists_all() {
    let t = Test::new();

    let output = t.cmd().arg("methods").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "vigenere");
    assert_stdout_contains(&output, "polybe");
    assert_stdout_contains(&output, "bazeries");
    assert_stdout_contains(&output, "no key");
}

#[test]
fn test_methods_json() {
    let t = Test::new();

    let output = t.cmd().args(["methods", "--json"]).output().unwrap();
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let methods = value.as_array().unwrap();
    assert_eq!(methods.len(), 3);
    assert_eq!(methods[0]["method"], "vigenere");
    assert_eq!(methods[0]["key"], "letters");
    assert_eq!(methods[1]["method"], "polybe");
    assert!(methods[1]["key"].is_null());
    assert_eq!(methods[2]["key"], "numeric");
}
