//! Vigenère cipher.

use super::{shift_letter, Cipher};
use crate::core::key::LetterKey;
use crate::core::normalize::{is_cipher_letter, letter_count};
use crate::core::types::Direction;
use crate::core::validation::validate_letter_key;
use crate::error::CipherError;

/// Polyalphabetic shift: the `i`-th letter moves by the `i mod len`-th key
/// letter (`A` = 0 … `Z` = 25).
///
/// The key position advances on letters only, so characters outside
/// `A..=Z` pass through without consuming key material.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vigenere;

impl Vigenere {
    fn transform(text: &str, key: &LetterKey, direction: Direction) -> Result<String, CipherError> {
        validate_letter_key(key, letter_count(text))?;

        let mut index = 0;
        let out = text
            .chars()
            .map(|c| match u8::try_from(c) {
                Ok(b) if is_cipher_letter(b) => {
                    let shifted = shift_letter(b, key.shift_at(index), direction);
                    index += 1;
                    char::from(shifted)
                }
                _ => c,
            })
            .collect();
        Ok(out)
    }
}

impl Cipher for Vigenere {
    type Key = LetterKey;

    fn encode(&self, text: &str, key: &LetterKey) -> Result<String, CipherError> {
        Self::transform(text, key, Direction::Encode)
    }

    fn decode(&self, text: &str, key: &LetterKey) -> Result<String, CipherError> {
        Self::transform(text, key, Direction::Decode)
    }

    fn name(&self) -> &'static str {
        "vigenere"
    }
}
