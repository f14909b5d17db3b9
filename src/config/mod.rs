//! Configuration loading and management

mod io;
mod settings;

pub use settings::{NotificationSettings, Settings, StorageBackend, StorageSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}
