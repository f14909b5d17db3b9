//! Durable storage for the progress state
//!
//! The whole state lives in one named slot as a JSON record:
//!
//! ```text
//! {
//!   "globalStats":  { "totalPlays", "longestSessionMinutes", "favoriteGame" },
//!   "perGameStats": { "<game>": { "plays", "wins"?, "bestScore"?, "bestTime"? } },
//!   "currency": 0,
//!   "unlockedAchievements": [..],
//!   "unlockedSkins": [..],
//!   "equippedSkins": { "<game>|global": "<skin>" | null }
//! }
//! ```
//!
//! Loading never fails: a missing or unreadable slot yields the zero state.

mod file;
mod record;
mod slot;
mod sqlite;

pub use file::FileSlotStore;
pub use slot::{MemorySlotStore, SlotStore};
pub use sqlite::SqliteSlotStore;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::progress::ProgressState;
use record::SavedRecord;

/// Slot key used by the arcade
pub const DEFAULT_SLOT_KEY: &str = "webarcade-arcade-state-v2";

/// Reads and writes [`ProgressState`] through a [`SlotStore`]
pub struct ProgressPersistence {
    store: Box<dyn SlotStore>,
    key: String,
}

impl ProgressPersistence {
    pub fn new(store: impl SlotStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// Persistence over the default slot key
    pub fn with_default_key(store: impl SlotStore + 'static) -> Self {
        Self::new(store, DEFAULT_SLOT_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the saved state, back-filling anything missing.
    ///
    /// Absent, unreadable or malformed slots all produce the zero state.
    pub fn load(&self) -> ProgressState {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(slot = %self.key, "No saved progress, starting fresh");
                return ProgressState::default();
            }
            Err(e) => {
                warn!(slot = %self.key, "Failed to read saved progress: {:#}", e);
                return ProgressState::default();
            }
        };

        match serde_json::from_str::<SavedRecord>(&raw) {
            Ok(record) => {
                let state = record.into_state();
                info!(
                    slot = %self.key,
                    total_plays = state.global_stats.total_plays,
                    achievements = state.unlocked_achievements.len(),
                    "Loaded saved progress"
                );
                state
            }
            Err(e) => {
                warn!(slot = %self.key, "Saved progress is malformed, resetting: {}", e);
                ProgressState::default()
            }
        }
    }

    /// Serialize and overwrite the slot
    pub fn save(&self, state: &ProgressState) -> Result<()> {
        let json = serde_json::to_string(state).context("Failed to serialize progress")?;
        self.store.write(&self.key, &json)
    }
}
