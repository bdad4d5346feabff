// SPDX-License-Identifier: GPL-3.0-only

//! Preference persistence between runs.
//!
//! The keyboard stores a single preference today, the active layout, under
//! [`app_settings::LANGUAGE_KEY`]. Stores are plain string key/value maps so
//! the layout tag format stays the same whatever backs the store.

use crate::app_settings;
use crate::layout::Layout;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from a file-backed preference store.
#[derive(Debug)]
pub enum PreferenceError {
    /// Reading or writing the preference file failed.
    Io { source: io::Error, path: PathBuf },
    /// The preference file is not a JSON object of strings.
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::Io { source, path } => {
                write!(f, "preference file '{}': {}", path.display(), source)
            }
            PreferenceError::Json { source, path } => {
                write!(f, "preference file '{}' is malformed: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PreferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreferenceError::Io { source, .. } => Some(source),
            PreferenceError::Json { source, .. } => Some(source),
        }
    }
}

/// A string key/value store that survives restarts.
pub trait PreferenceStore {
    /// Reads a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;

    /// Reads the stored layout, defaulting to Latin.
    fn language(&self) -> Layout {
        Layout::from_preference(self.get(app_settings::LANGUAGE_KEY).as_deref())
    }

    /// Stores the active layout.
    fn set_language(&mut self, layout: Layout) -> Result<(), PreferenceError> {
        self.set(app_settings::LANGUAGE_KEY, layout.tag())
    }
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// Preferences held in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one value already set.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences stored as a JSON object in a file.
///
/// The file is read once on open and rewritten in full on every `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| PreferenceError::Json {
                    source,
                    path: path.clone(),
                })?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PreferenceError::Io { source, path }),
        };

        Ok(Self { path, values })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PreferenceError> {
        let io_err = |source| PreferenceError::Io {
            source,
            path: self.path.clone(),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(&self.values).map_err(|source| {
            PreferenceError::Json {
                source,
                path: self.path.clone(),
            }
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}
