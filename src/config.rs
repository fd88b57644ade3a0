//! Settings file
//!
//! Optional presentation preferences, read from `--config <PATH>` or from
//! `~/.config/loanscreen/config.toml` (XDG standard). Every key has a default,
//! so an empty or missing file is valid.
//!
//! ```toml
//! [display]
//! color = true
//! currency = "GBP"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "loanscreen";
const CONFIG_FILE: &str = "config.toml";

/// Errors reading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read settings file {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid settings TOML
    #[error("invalid settings file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },
}

/// loanscreen settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Display preferences
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Whether to color output
    #[serde(default = "default_color")]
    pub color: bool,
    /// Currency label shown in amount prompts
    #[serde(default = "default_currency")]
    pub currency: String,
}

const fn default_color() -> bool {
    true
}

fn default_currency() -> String {
    "GBP".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            color: default_color(),
            currency: default_currency(),
        }
    }
}

impl Settings {
    /// The default settings file path, if a config directory is known
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read settings from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings.
    ///
    /// An explicit path must exist and parse. Otherwise the default path is
    /// tried; a missing default file gives defaults and a broken one gives
    /// defaults with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading settings from {}", path.display());
            return Self::from_file(path);
        }

        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        };

        Ok(Self::from_file(&path).unwrap_or_else(|err| {
            warn!("{err}; using default settings");
            Self::default()
        }))
    }
}
