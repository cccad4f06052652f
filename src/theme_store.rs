//! Durable theme preference.
//!
//! Values live in a TOML table (`storage.toml`); a save only touches the
//! preference key, so other entries of any type survive it.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::app_dirs::{self, AppDirError};
use crate::config::atomic_write;

/// Key the preference is stored under unless configured otherwise.
pub const DEFAULT_THEME_KEY: &str = "vite-ui-theme";
/// Key/value file inside the app directory.
pub const STORAGE_FILE_NAME: &str = "storage.toml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    /// Stored value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Claro",
            Self::Dark => "Oscuro",
            Self::System => "Sistema",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid storage file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize storage file {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error(transparent)]
    AppDir(#[from] AppDirError),
}

/// Reads and writes the theme preference under one key.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    path: PathBuf,
    key: String,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Store rooted in the app directory.
    pub fn open_default(key: impl Into<String>) -> Result<Self, ThemeStoreError> {
        let path = app_dirs::app_root_dir()?.join(STORAGE_FILE_NAME);
        Ok(Self::new(path, key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored preference, or [`ThemePreference::System`] when absent or unreadable.
    pub fn load(&self) -> ThemePreference {
        match self.read_table() {
            Ok(table) => table
                .get(&self.key)
                .and_then(toml::Value::as_str)
                .and_then(ThemePreference::parse)
                .unwrap_or_default(),
            Err(err) => {
                warn!("Ignoring theme storage: {err}");
                ThemePreference::default()
            }
        }
    }

    pub fn save(&self, preference: ThemePreference) -> Result<(), ThemeStoreError> {
        // A broken file is replaced rather than blocking the write.
        let mut table = self.read_table().unwrap_or_default();
        table.insert(
            self.key.clone(),
            toml::Value::String(preference.as_str().to_string()),
        );
        let data = toml::to_string(&table).map_err(|source| ThemeStoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ThemeStoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        atomic_write(&self.path, data.as_bytes()).map_err(|source| ThemeStoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(theme = %preference, "Theme preference saved");
        Ok(())
    }

    fn read_table(&self) -> Result<toml::Table, ThemeStoreError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let text = std::fs::read_to_string(&self.path).map_err(|source| ThemeStoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ThemeStoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
