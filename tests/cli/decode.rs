//! Tests for `chiffre decode`.

use crate::support::*;

#[test]
fn test_decode_vigenere() {
    let t = Test::new();

    let output = t.decode("vigenere", VIGENERE_CODED, Some(VIGENERE_KEY));
    assert_payload(&output, VIGENERE_PLAIN);
}

#[test]
fn test_decode_polybe() {
    let t = Test::new();

    let output = t.decode("polybe", POLYBE_CODED, None);
    assert_payload(&output, POLYBE_PLAIN);
}

#[test]
fn test_decode_polybe_passes_malformed_tokens() {
    let t = Test::new();

    let output = t.decode("polybe", "12 9X 13", None);
    assert_payload(&output, "B9XC");
}

#[test]
fn test_decode_bazeries() {
    let t = Test::new();

    let output = t.decode("bazeries", BAZERIES_CODED, Some(BAZERIES_KEY));
    assert_payload(&output, BAZERIES_PLAIN);
}

#[test]
fn test_roundtrips() {
    let t = Test::new();

    assert_roundtrip(&t, "vigenere", "Le chiffre indéchiffrable", Some("Blaise"), "LECHIFFREINDECHIFFRABLE");
    assert_roundtrip(&t, "polybe", "Polybe", None, "POLYBE");
    assert_roundtrip(&t, "bazeries", "Étienne Bazeries", Some("7"), "ETIENNEBAZERIES");
}

#[test]
fn test_roundtrip_preserve_mode() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["encode", "bazeries", "Rendez-vous à 8h.", "--key", "4", "--preserve"])
        .output()
        .unwrap();
    assert_success(&output);
    let coded = stdout(&output).trim_end().to_string();
    assert!(coded.ends_with(" 8X."), "punctuation should stay in place: {}", coded);

    let output = t
        .cmd()
        .args(["decode", "bazeries", &coded, "--key", "4", "--preserve"])
        .output()
        .unwrap();
    assert_payload(&output, "RENDEZ-VOUS A 8H.");
}
