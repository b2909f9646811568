//! Core library components.
//!
//! Normalization, keys, validation and the three ciphers, plus the
//! configuration the command-line front end reads.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod key;
pub mod normalize;
pub mod types;
pub mod validation;
