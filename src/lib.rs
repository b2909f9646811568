//! Chiffre - classical ciphers over a normalized Latin alphabet.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line front end
//! │   ├── run           # encode / decode / normalize
//! │   ├── methods       # List methods and their key kinds
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── normalize     # Diacritic folding, letters-only text
//!     ├── key           # Letter and numeric keys
//!     ├── validation    # Key checks against the text
//!     ├── cipher/       # Cipher schemes
//!     │   ├── mod       # Cipher trait
//!     │   ├── vigenere  # Repeating-key polyalphabetic shift
//!     │   ├── polybe    # 5×5 coordinate square
//!     │   ├── bazeries  # Shift by key squared
//!     │   └── facade    # Request dispatch
//!     └── config        # Optional front-end config file
//! ```
//!
//! # Example
//!
//! ```
//! use chiffre::{apply, CipherKey, Direction, Method};
//!
//! let key = CipherKey::letters("lemon");
//! let coded = apply(Method::Vigenere, Direction::Encode, "Attack at dawn", Some(&key)).unwrap();
//! assert_eq!(coded, "LXFOPVEFRNHR");
//!
//! let coords = apply(Method::Polybe, Direction::Encode, "back", None).unwrap();
//! assert_eq!(coords, "12 11 13 25");
//! ```
//!
//! These are historical ciphers. They offer no protection against modern
//! cryptanalysis.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::{apply, Cipher, CipherFacade, CipherResult};
pub use crate::core::key::{CipherKey, LetterKey, NumericKey};
pub use crate::core::normalize::{normalize, NormalizedText};
pub use crate::core::types::{Direction, KeyKind, Method, TextMode};
pub use crate::error::{CipherError, Error, Result};
