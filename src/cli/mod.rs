//! Command-line interface.
//!
//! A one-shot front end over the core: every invocation runs a single
//! request and exits.

pub mod completions;
pub mod methods;
pub mod output;
pub mod run;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;
use crate::core::types::{Direction, KeyKind, Method};
use crate::error::{CipherError, ConfigError, Error, Result};

/// Chiffre - classical ciphers for short texts.
#[derive(Parser)]
#[command(
    name = "chiffre",
    about = "Vigenère, Polybe and Bazeries ciphers for short texts",
    version,
    after_help = "Historical ciphers only. Do not use them to protect real secrets."
)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to <config dir>/chiffre/config.toml)
    #[arg(long, global = true, env = constants::CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encode a text
    Encode(CipherArgs),

    /// Decode a text
    Decode(CipherArgs),

    /// Show a text reduced to the cipher alphabet
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// List the available methods and the key each one takes
    Methods,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments shared by `encode` and `decode`.
#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Cipher method: vigenere, polybe or bazeries
    pub method: Method,

    /// Text to transform (put it after `--` if it starts with a dash)
    pub text: String,

    /// Key: letters for vigenere, a positive integer for bazeries
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Keep spaces and punctuation in place instead of stripping them
    #[arg(long)]
    pub preserve: bool,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    match cli.command {
        Encode(args) => {
            let (config, json) = settings(cli.config.as_deref(), cli.json)?;
            run::execute(Direction::Encode, &args, &config, json)
        }
        Decode(args) => {
            let (config, json) = settings(cli.config.as_deref(), cli.json)?;
            run::execute(Direction::Decode, &args, &config, json)
        }
        Normalize { text } => {
            let (_, json) = settings(cli.config.as_deref(), cli.json)?;
            run::normalize(&text, json)
        }
        Methods => {
            let (_, json) = settings(cli.config.as_deref(), cli.json)?;
            methods::execute(json)
        }
        Completions { shell } => completions::execute(shell),
    }
}

/// Load the config file and resolve the output format (the flag wins).
fn settings(path: Option<&Path>, json_flag: bool) -> Result<(Config, bool)> {
    let config = Config::discover(path)?;
    let json = json_flag || config.json();
    Ok((config, json))
}

/// Follow-up advice for an error, if there is any to give.
pub fn suggestion(err: &Error) -> Option<String> {
    match err {
        Error::Cipher(CipherError::EmptyInput) => {
            Some("the text needs at least one letter (polybe decode: one token)".to_string())
        }
        Error::Cipher(CipherError::EmptyKey) => {
            Some("pass a key containing letters: --key LEMON".to_string())
        }
        Error::Cipher(CipherError::KeyTooLong { text_len, .. }) => {
            Some(format!("use a key of at most {} letters", text_len))
        }
        Error::Cipher(CipherError::NonPositiveKey(_)) | Error::Cipher(CipherError::InvalidNumericKey(_)) => {
            Some("bazeries keys are positive whole numbers: --key 3".to_string())
        }
        Error::Cipher(CipherError::KeyTooLarge { text_len, .. }) => {
            Some(format!("use a key between 1 and {}", text_len))
        }
        Error::Cipher(CipherError::KeyKindMismatch { expected, .. }) => Some(
            match expected {
                Some(KeyKind::Letters) => "pass a letter key: --key LEMON",
                Some(KeyKind::Numeric) => "pass a numeric key: --key 3",
                None => "polybe takes no key; drop --key",
            }
            .to_string(),
        ),
        Error::Config(ConfigError::InvalidValue { field: "mode", .. }) => {
            Some("mode must be \"strict\" or \"preserve\"".to_string())
        }
        _ => None,
    }
}
