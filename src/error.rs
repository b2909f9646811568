//! Error types for chiffre.
//!
//! `CipherError` covers every way a cipher request can be rejected. The
//! top-level `Error` adds the failures of the command-line front end
//! (configuration, I/O, JSON rendering).

use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::{KeyKind, Method};

/// Rejection of a cipher request.
///
/// All of these are raised before any text is transformed, so a failed
/// request never yields partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("text contains no letters to process")]
    EmptyInput,

    #[error("key contains no letters")]
    EmptyKey,

    #[error("key has {key_len} letters but the text only has {text_len}")]
    KeyTooLong { key_len: usize, text_len: usize },

    #[error("numeric key must be positive, got {0}")]
    NonPositiveKey(i64),

    #[error("numeric key {key} exceeds the {text_len} letters of the text")]
    KeyTooLarge { key: i64, text_len: usize },

    #[error("{method} expects {}, got {}", describe(.expected), describe(.found))]
    KeyKindMismatch {
        method: Method,
        expected: Option<KeyKind>,
        found: Option<KeyKind>,
    },

    #[error("invalid numeric key: {0:?}")]
    InvalidNumericKey(String),
}

fn describe(kind: &Option<KeyKind>) -> &'static str {
    match kind {
        Some(KeyKind::Letters) => "a letter key",
        Some(KeyKind::Numeric) => "a numeric key",
        None => "no key",
    }
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
