//! Cipher keys.
//!
//! A key is either a run of letters (Vigenère) or an integer (Bazeries).
//! Parsing never checks a key against a text; that happens in
//! [`crate::core::validation`] once the text is known.

use zeroize::Zeroize;

use crate::core::normalize::{normalize, NormalizedText};
use crate::core::types::KeyKind;
use crate::error::CipherError;

/// Letter key for the Vigenère cipher, normalized like the text it encodes.
///
/// The letters are wiped from memory when the key is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct LetterKey(NormalizedText);

impl LetterKey {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shift (0..26) applied at letter position `index`.
    ///
    /// Must not be called on an empty key.
    pub(crate) fn shift_at(&self, index: usize) -> u8 {
        let bytes = self.0.as_str().as_bytes();
        bytes[index % bytes.len()] - b'A'
    }
}

impl std::fmt::Debug for LetterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LetterKey")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Drop for LetterKey {
    fn drop(&mut self) {
        let mut letters = std::mem::take(&mut self.0).into_string();
        letters.zeroize();
    }
}

/// Integer key for the Bazeries cipher.
///
/// Any `i64` can be held; positivity and range are checked against the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericKey(i64);

impl NumericKey {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Alphabet shift `key² mod 26`.
    ///
    /// Keys whose squares agree modulo 26 share a shift.
    pub fn shift(self) -> u8 {
        let residue = self.0.rem_euclid(26);
        ((residue * residue) % 26) as u8
    }
}

/// Key supplied with a cipher request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    Letters(LetterKey),
    Numeric(NumericKey),
}

impl CipherKey {
    /// Build a letter key from raw user input.
    pub fn letters(raw: &str) -> Self {
        CipherKey::Letters(LetterKey::new(raw))
    }

    /// Parse a numeric key from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidNumericKey` if the trimmed input is not a
    /// base-10 integer that fits in an `i64`.
    pub fn numeric(raw: &str) -> Result<Self, CipherError> {
        raw.trim()
            .parse::<i64>()
            .map(|value| CipherKey::Numeric(NumericKey::new(value)))
            .map_err(|_| CipherError::InvalidNumericKey(raw.to_string()))
    }

    /// Parse raw input as the key kind a method expects.
    pub fn parse(kind: KeyKind, raw: &str) -> Result<Self, CipherError> {
        match kind {
            KeyKind::Letters => Ok(Self::letters(raw)),
            KeyKind::Numeric => Self::numeric(raw),
        }
    }

    /// Guess the key kind from its shape: integers are numeric keys,
    /// anything else is a letter key.
    pub fn infer(raw: &str) -> Self {
        Self::numeric(raw).unwrap_or_else(|_| Self::letters(raw))
    }

    pub fn kind(&self) -> KeyKind {
        match self {
            CipherKey::Letters(_) => KeyKind::Letters,
            CipherKey::Numeric(_) => KeyKind::Numeric,
        }
    }
}

impl From<LetterKey> for CipherKey {
    fn from(key: LetterKey) -> Self {
        CipherKey::Letters(key)
    }
}

impl From<NumericKey> for CipherKey {
    fn from(key: NumericKey) -> Self {
        CipherKey::Numeric(key)
    }
}
