//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ArcadeConfig;
use crate::persistence::DEFAULT_SLOT_KEY;
use crate::progress::DEFAULT_TOAST_DURATION_MS;

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Where progress is persisted
    #[serde(default)]
    pub storage: StorageSettings,

    /// Achievement toast behaviour
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Which slot store backs the progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite database file
    #[default]
    Sqlite,
    /// One JSON file per slot in a directory
    File,
    /// Nothing survives the process
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Database file (sqlite) or directory (file). Defaults live under ~/.arcade/
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Name of the slot holding the progress record
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

impl StorageSettings {
    /// Configured path, or the backend's default location
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        let dir = ArcadeConfig::global_config_dir();
        match self.backend {
            StorageBackend::Sqlite => dir.join("progress.db"),
            StorageBackend::File => dir.join("saves"),
            StorageBackend::Memory => PathBuf::new(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: None,
            slot_key: default_slot_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// How long an "achievement unlocked" toast stays visible
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: i64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_toast_duration_ms() -> i64 {
    DEFAULT_TOAST_DURATION_MS
}
