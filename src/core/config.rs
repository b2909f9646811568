//! Configuration file management.
//!
//! The core needs no configuration. The command-line front end reads an
//! optional TOML file for its defaults:
//!
//! ```toml
//! [chiffre]
//! mode = "preserve"
//! json = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::types::TextMode;
use crate::error::{ConfigError, Result};

/// Front-end configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chiffre: Settings,
}

/// The `[chiffre]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Text mode: "strict" (default) or "preserve"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Emit JSON instead of plain text
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Default location: `<config_dir>/chiffre/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load the configuration the front end should use.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and an absent file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a file is missing, unreadable, malformed or
    /// holds an invalid value.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(mode = %config.text_mode()?, json = config.chiffre.json, "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidValue`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is one the front end understands.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on the first bad value.
    pub fn validate(&self) -> Result<()> {
        self.text_mode().map(|_| ())
    }

    /// Configured text mode, `Strict` when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown mode name.
    pub fn text_mode(&self) -> Result<TextMode> {
        match self.chiffre.mode.as_deref().map(str::trim) {
            None => Ok(TextMode::Strict),
            Some(mode) if mode.eq_ignore_ascii_case("strict") => Ok(TextMode::Strict),
            Some(mode) if mode.eq_ignore_ascii_case("preserve") => Ok(TextMode::Preserve),
            Some(other) => Err(ConfigError::InvalidValue {
                field: "mode",
                value: other.to_string(),
            }
            .into()),
        }
    }

    pub fn json(&self) -> bool {
        self.chiffre.json
    }
}
