//! Constants used throughout chiffre.
//!
//! Centralizes the alphabet parameters and front-end names.

/// Size of the cipher alphabet (`A..=Z`).
pub const ALPHABET_LEN: u8 = 26;

/// Side of the Polybe square.
pub const SQUARE_SIDE: usize = 5;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "CHIFFRE_LOG";

/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "CHIFFRE_CONFIG";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "chiffre";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";
