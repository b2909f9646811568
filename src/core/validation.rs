//! Key validation.
//!
//! Checks a key against the text it is about to be applied to. Each cipher
//! calls these before touching the text, so a rejected request never
//! produces output.

use crate::core::key::{CipherKey, LetterKey, NumericKey};
use crate::core::types::Method;
use crate::error::CipherError;

/// Validate a Vigenère key against a text of `text_len` letters.
///
/// # Errors
///
/// - `CipherError::EmptyKey` if the key has no letters
/// - `CipherError::KeyTooLong` if the key is longer than the text
pub fn validate_letter_key(key: &LetterKey, text_len: usize) -> Result<(), CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    if key.len() > text_len {
        return Err(CipherError::KeyTooLong {
            key_len: key.len(),
            text_len,
        });
    }

    Ok(())
}

/// Validate a Bazeries key against a text of `text_len` letters.
///
/// # Errors
///
/// - `CipherError::NonPositiveKey` if the key is zero or negative
/// - `CipherError::KeyTooLarge` if the key exceeds the letter count
pub fn validate_numeric_key(key: NumericKey, text_len: usize) -> Result<(), CipherError> {
    let value = key.value();
    if value <= 0 {
        return Err(CipherError::NonPositiveKey(value));
    }

    match usize::try_from(value) {
        Ok(v) if v <= text_len => Ok(()),
        _ => Err(CipherError::KeyTooLarge {
            key: value,
            text_len,
        }),
    }
}

/// Check that the supplied key variant is the one `method` takes.
///
/// A missing key counts as a mismatch for methods that need one.
pub fn validate_key_kind(method: Method, key: Option<&CipherKey>) -> Result<(), CipherError> {
    let expected = method.key_kind();
    let found = key.map(CipherKey::kind);

    if expected != found {
        return Err(CipherError::KeyKindMismatch {
            method,
            expected,
            found,
        });
    }

    Ok(())
}
