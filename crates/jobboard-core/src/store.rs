//! Per-user storage.
//!
//! Two small JSON files replace browser storage:
//! - `preferences.json` in the config directory keeps the last API URL and the
//!   theme across runs.
//! - `selectedJobDetail.json` in the data directory keeps the selected item so
//!   the detail view can be rendered without fetching again.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::normalize::NormalizedItem;
use crate::theme::Theme;

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Fixed identifier of the selected item.
pub const SESSION_KEY: &str = "selectedJobDetail";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to determine a storage directory")]
    NoStorageDir,
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Directories holding preferences and session data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl StoragePaths {
    /// Standard per-user directories for this tool.
    pub fn from_user_dirs() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "jobboard").ok_or(StoreError::NoStorageDir)?;
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_local_dir().to_path_buf(),
        })
    }

    /// Keep everything below one directory.
    pub fn under(root: &Path) -> Self {
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE_NAME)
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join(format!("{SESSION_KEY}.json"))
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, data)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PreferencesPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

/// Durable user preferences backed by a JSON file.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    payload: PreferencesPayload,
}

impl Preferences {
    /// Load preferences from `path`. A missing or unreadable file yields
    /// defaults.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let payload = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(
                    "Ignoring invalid preferences at {}: {}",
                    path.display(),
                    e
                );
                PreferencesPayload::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PreferencesPayload::default(),
            Err(e) => {
                warn!("Failed to read preferences at {}: {}", path.display(), e);
                PreferencesPayload::default()
            }
        };
        Self { path, payload }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn api_url(&self) -> Option<&str> {
        self.payload.api_url.as_deref()
    }

    pub fn set_api_url(&mut self, url: impl Into<String>) {
        self.payload.api_url = Some(url.into());
    }

    pub fn theme(&self) -> Option<Theme> {
        self.payload.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.payload.theme = Some(theme);
    }

    pub fn save(&self) -> Result<(), StoreError> {
        write_json(&self.path, &self.payload)
    }
}

/// Selected item as stored for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub item: Value,
    pub normalized: NormalizedItem,
}

/// Outcome of reading the stored selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLoad {
    Missing,
    Corrupt,
    Loaded(SessionPayload),
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, payload: &SessionPayload) -> Result<(), StoreError> {
        write_json(&self.path, payload)
    }

    pub fn load(&self) -> SessionLoad {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SessionLoad::Missing,
            Err(e) => {
                warn!("Failed to read session data at {}: {}", self.path.display(), e);
                return SessionLoad::Corrupt;
            }
        };
        if text.trim().is_empty() {
            return SessionLoad::Missing;
        }

        match serde_json::from_str::<SessionPayload>(&text) {
            Ok(payload) if !payload.item.is_null() => SessionLoad::Loaded(payload),
            Ok(_) => SessionLoad::Corrupt,
            Err(e) => {
                debug!("Session data is malformed: {}", e);
                SessionLoad::Corrupt
            }
        }
    }
}
