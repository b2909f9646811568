//! Cipher implementations.
//!
//! Three classical schemes over the `A..=Z` alphabet:
//!
//! - **Vigenère**: polyalphabetic shift keyed by a repeating letter key.
//! - **Polybe**: keyless substitution of each letter by its coordinates in a
//!   fixed 5×5 square.
//! - **Bazeries**: a single Caesar shift equal to the square of a numeric key.
//!
//! ## Adding a New Scheme
//!
//! 1. Implement the `Cipher` trait in a new file
//! 2. Add a `Method` variant and route it in `facade`
//! 3. Re-export the typed convenience functions from this module

mod bazeries;
mod facade;
mod polybe;
mod vigenere;

pub use bazeries::Bazeries;
pub use facade::{apply, CipherFacade, CipherResult};
pub use polybe::Polybe;
pub use vigenere::Vigenere;

pub mod square {
    //! Read-only access to the Polybe square.
    pub use super::polybe::{coordinates, letter_at};
}

use crate::core::constants::ALPHABET_LEN;
use crate::core::key::{LetterKey, NumericKey};
use crate::core::normalize::NormalizedText;
use crate::core::types::Direction;
use crate::error::CipherError;

/// A reversible text transformation.
///
/// `encode` takes folded text: `A..=Z` characters are transformed and any
/// other character is handled by the scheme's passthrough rule. Strict
/// callers hand in a [`NormalizedText`], which holds nothing but letters.
/// `decode` takes the scheme's ciphertext form as produced by `encode`
/// (letters for Vigenère and Bazeries, raw coordinate tokens for Polybe).
pub trait Cipher {
    /// Key material the scheme is parameterized by (`()` for keyless schemes).
    type Key: ?Sized;

    /// Encode folded plaintext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key is not valid for this text. Nothing
    /// is transformed in that case.
    fn encode(&self, text: &str, key: &Self::Key) -> Result<String, CipherError>;

    /// Decode ciphertext produced by [`Cipher::encode`] with the same key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key is not valid for this text.
    fn decode(&self, text: &str, key: &Self::Key) -> Result<String, CipherError>;

    /// Scheme name for logs and display.
    fn name(&self) -> &'static str;
}

/// Rotate an uppercase letter through the alphabet.
pub(crate) fn shift_letter(letter: u8, shift: u8, direction: Direction) -> u8 {
    let offset = letter - b'A';
    let shift = shift % ALPHABET_LEN;
    let rotated = match direction {
        Direction::Encode => (offset + shift) % ALPHABET_LEN,
        Direction::Decode => (offset + ALPHABET_LEN - shift) % ALPHABET_LEN,
    };
    rotated + b'A'
}

// Typed convenience functions for strict, letters-only text.

/// Vigenère-encode normalized text.
///
/// # Errors
///
/// `CipherError::EmptyKey` or `CipherError::KeyTooLong`.
pub fn vigenere_encode(text: &NormalizedText, key: &LetterKey) -> Result<NormalizedText, CipherError> {
    Vigenere.encode(text.as_str(), key).map(NormalizedText::from_letters)
}

/// Invert [`vigenere_encode`].
///
/// # Errors
///
/// `CipherError::EmptyKey` or `CipherError::KeyTooLong`.
pub fn vigenere_decode(text: &NormalizedText, key: &LetterKey) -> Result<NormalizedText, CipherError> {
    Vigenere.decode(text.as_str(), key).map(NormalizedText::from_letters)
}

/// Replace every letter by its two-digit Polybe coordinates.
pub fn polybe_encode(text: &NormalizedText) -> String {
    polybe::encode_tokens(text.as_str())
}

/// Turn Polybe coordinates back into letters, echoing malformed tokens.
pub fn polybe_decode(coded: &str) -> String {
    polybe::decode_tokens(coded)
}

/// Bazeries-encode normalized text.
///
/// # Errors
///
/// `CipherError::NonPositiveKey` or `CipherError::KeyTooLarge`.
pub fn bazeries_encode(text: &NormalizedText, key: NumericKey) -> Result<NormalizedText, CipherError> {
    Bazeries.encode(text.as_str(), &key).map(NormalizedText::from_letters)
}

/// Invert [`bazeries_encode`].
///
/// # Errors
///
/// `CipherError::NonPositiveKey` or `CipherError::KeyTooLarge`.
pub fn bazeries_decode(text: &NormalizedText, key: NumericKey) -> Result<NormalizedText, CipherError> {
    Bazeries.decode(text.as_str(), &key).map(NormalizedText::from_letters)
}
