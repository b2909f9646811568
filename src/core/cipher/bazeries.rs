//! Bazeries fixed-shift cipher.

use super::{shift_letter, Cipher};
use crate::core::key::NumericKey;
use crate::core::normalize::{is_cipher_letter, letter_count};
use crate::core::types::Direction;
use crate::core::validation::validate_numeric_key;
use crate::error::CipherError;

/// Caesar shift by `key² mod 26`.
///
/// Distinct keys with the same square modulo 26 (e.g. 5 and 21) produce
/// identical ciphertext.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bazeries;

impl Bazeries {
    fn transform(text: &str, key: NumericKey, direction: Direction) -> Result<String, CipherError> {
        validate_numeric_key(key, letter_count(text))?;

        let shift = key.shift();
        let out = text
            .chars()
            .map(|c| match u8::try_from(c) {
                Ok(b) if is_cipher_letter(b) => char::from(shift_letter(b, shift, direction)),
                _ => c,
            })
            .collect();
        Ok(out)
    }
}

impl Cipher for Bazeries {
    type Key = NumericKey;

    fn encode(&self, text: &str, key: &NumericKey) -> Result<String, CipherError> {
        Self::transform(text, *key, Direction::Encode)
    }

    fn decode(&self, text: &str, key: &NumericKey) -> Result<String, CipherError> {
        Self::transform(text, *key, Direction::Decode)
    }

    fn name(&self) -> &'static str {
        "bazeries"
    }
}
