//! Alphabet normalization.
//!
//! Every cipher works over the 26 uppercase ASCII letters. Input text is
//! folded first (accented vowels and `ç` lose their diacritic, ASCII letters
//! are upper-cased) and then, in strict mode, stripped of everything that is
//! not a letter.

use std::fmt;

/// Uppercase letters drawn from `A..=Z` and nothing else.
///
/// Only [`normalize`] and the ciphers in this crate construct it, so the
/// invariant holds for every value in circulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Wrap a string already known to contain only `A..=Z`.
    pub(crate) fn from_letters(letters: String) -> Self {
        debug_assert!(letters.bytes().all(is_cipher_letter));
        Self(letters)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

/// Reduce arbitrary text to its uppercase Latin letters.
///
/// Total: digits, punctuation, whitespace and letters outside the Latin
/// alphabet are dropped, so input without letters yields an empty value.
pub fn normalize(input: &str) -> NormalizedText {
    let letters = input
        .chars()
        .filter_map(fold_letter)
        .collect::<String>();
    NormalizedText::from_letters(letters)
}

/// Fold diacritics and upper-case letters, keeping every other character.
pub fn fold(input: &str) -> String {
    input
        .chars()
        .map(|c| fold_letter(c).unwrap_or(c))
        .collect()
}

/// Count the `A..=Z` characters of a folded string.
pub fn letter_count(folded: &str) -> usize {
    folded.bytes().filter(|b| is_cipher_letter(*b)).count()
}

/// Membership in the cipher alphabet.
pub fn is_cipher_letter(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Membership in the Polybe coordinate alphabet (`1..=5`).
pub fn is_coordinate_digit(b: u8) -> bool {
    (b'1'..=b'5').contains(&b)
}

/// Map a character to its uppercase base letter, if it has one.
fn fold_letter(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ä' | 'À' | 'Á' | 'Â' | 'Ä' => 'A',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ô' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' | 'Ç' => 'C',
        c if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return None,
    };
    Some(base)
}
