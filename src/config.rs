//! Application settings stored as TOML under the app directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::app_dirs::{self, AppDirError};
use crate::prediction_gateway::DEFAULT_ENDPOINT;
use crate::table::{DEFAULT_PAGE_SIZE, normalize_page_size};
use crate::theme_store::DEFAULT_THEME_KEY;

/// Settings file name inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
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
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error(transparent)]
    AppDir(#[from] AppDirError),
}

/// User-editable settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// URL the image is posted to.
    pub classifier_endpoint: String,
    /// Rows per page when the app starts.
    pub default_page_size: usize,
    /// Key the theme preference is stored under.
    pub theme_storage_key: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            classifier_endpoint: DEFAULT_ENDPOINT.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            theme_storage_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

impl AppSettings {
    /// Clamp values into what the app can use.
    pub fn normalized(mut self) -> Self {
        self.default_page_size = normalize_page_size(self.default_page_size);
        if self.classifier_endpoint.trim().is_empty() {
            self.classifier_endpoint = DEFAULT_ENDPOINT.to_string();
        }
        if self.theme_storage_key.trim().is_empty() {
            self.theme_storage_key = DEFAULT_THEME_KEY.to_string();
        }
        self
    }
}

/// Resolve the settings path, ensuring the app directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings, or defaults when the file does not exist yet.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Load settings for startup. A missing file is written with defaults;
/// a broken file is logged and ignored.
pub fn load_for_startup() -> AppSettings {
    let path = match config_path() {
        Ok(path) => path,
        Err(err) => {
            warn!("Config directory unavailable, using defaults: {err}");
            return AppSettings::default();
        }
    };
    let existed = path.exists();
    match load_from(&path) {
        Ok(settings) => {
            if !existed {
                match save_to_path(&settings, &path) {
                    Ok(()) => info!(path = %path.display(), "Wrote default config"),
                    Err(err) => warn!("Failed to write default config: {err}"),
                }
            }
            settings
        }
        Err(err) => {
            warn!("Failed to load config, using defaults: {err}");
            AppSettings::default()
        }
    }
}

pub fn load_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Persist settings to the default location.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(&settings.clone().normalized()).map_err(|source| {
        ConfigError::SerializeToml {
            path: path.to_path_buf(),
            source,
        }
    })?;
    atomic_write(path, data.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write through a sibling temp file and rename over `path`.
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::other("path has no parent directory"))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("path has no file name"))?;
    let tmp_path = dir.join(format!(
        "{}.tmp-{}",
        file_name.to_string_lossy(),
        uuid::Uuid::new_v4().simple()
    ));
    let result = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&tmp_path, path));
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}
