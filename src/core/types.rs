//! Request vocabulary shared by the facade, the config file and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cipher scheme selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Vigenere,
    Polybe,
    Bazeries,
}

impl Method {
    /// Every supported method, in menu order.
    pub const ALL: [Method; 3] = [Method::Vigenere, Method::Polybe, Method::Bazeries];

    /// Lowercase identifier used on the command line and in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Method::Vigenere => "vigenere",
            Method::Polybe => "polybe",
            Method::Bazeries => "bazeries",
        }
    }

    /// Kind of key the method must be given, `None` for keyless methods.
    pub fn key_kind(self) -> Option<KeyKind> {
        match self {
            Method::Vigenere => Some(KeyKind::Letters),
            Method::Polybe => None,
            Method::Bazeries => Some(KeyKind::Numeric),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vigenere" | "vigenère" => Ok(Method::Vigenere),
            "polybe" | "polybius" => Ok(Method::Polybe),
            "bazeries" => Ok(Method::Bazeries),
            other => Err(format!(
                "unknown method: {}. Supported: vigenere, polybe, bazeries",
                other
            )),
        }
    }
}

/// Whether a request encodes plaintext or decodes ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

/// The two key variants a method can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Letters,
    Numeric,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Letters => f.write_str("letters"),
            KeyKind::Numeric => f.write_str("numeric"),
        }
    }
}

/// How characters outside `A..=Z` are treated.
///
/// - `Strict`: input is normalized, so only letters reach the cipher.
/// - `Preserve`: input is only folded; punctuation, digits and spaces stay in
///   place and do not consume a key position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    #[default]
    Strict,
    Preserve,
}

impl fmt::Display for TextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMode::Strict => f.write_str("strict"),
            TextMode::Preserve => f.write_str("preserve"),
        }
    }
}
