// SPDX-License-Identifier: GPL-3.0-only

//! User configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! is a valid configuration.

use crate::app_settings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which input sources may move the caret with the arrow keys.
///
/// Navigation through [`crate::feed::FeedItem::Edit`] is always allowed;
/// this only governs arrow key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationPolicy {
    /// Only synthetic events (pointer clicks on rendered keys) navigate.
    /// Hardware arrows are left to the host.
    #[default]
    SyntheticOnly,
    /// All arrow presses navigate.
    Always,
    /// Arrow presses never navigate.
    Never,
}

impl NavigationPolicy {
    /// Returns true if an arrow press from this source should navigate.
    pub fn allows(self, source: crate::input::EventSource) -> bool {
        match self {
            NavigationPolicy::SyntheticOnly => source == crate::input::EventSource::Synthetic,
            NavigationPolicy::Always => true,
            NavigationPolicy::Never => false,
        }
    }
}

/// User configuration that persists between application runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout table to load instead of the embedded one.
    pub layout_path: Option<PathBuf>,
    /// Where preferences are stored. In-memory only when unset.
    pub preferences_path: Option<PathBuf>,
    /// Arrow key navigation policy.
    pub navigation: NavigationPolicy,
    /// Text the Tab key inserts.
    pub tab_text: String,
    /// Text the buffer starts with.
    pub initial_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout_path: None,
            preferences_path: None,
            navigation: NavigationPolicy::default(),
            tab_text: app_settings::DEFAULT_TAB_TEXT.to_string(),
            initial_text: String::new(),
        }
    }
}

/// Errors from loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io { source: io::Error, path: PathBuf },
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { source, path } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Json { source, path } => {
                write!(f, "invalid config '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json { source, .. } => Some(source),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Finds and loads the configuration for this process.
    ///
    /// `explicit` (normally the value of [`app_settings::CONFIG_ENV_VAR`])
    /// must point at a readable file. Otherwise `dualboard.json` in the
    /// working directory is used if present, and defaults if not.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        let local = Path::new(app_settings::DEFAULT_CONFIG_FILE);
        if local.is_file() {
            tracing::debug!("Loading config from {}", local.display());
            return Self::load(local);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}
