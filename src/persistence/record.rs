//! Persisted record format and back-fill
//!
//! Every field is optional on the way in. Missing fields take their default,
//! unknown fields and unknown map keys are ignored. Older records used
//! `totalGamesPlayed`, `longestSession`, `achievements` and `skinsUnlocked`;
//! those names are still read, and lose to the current name when both appear.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::{GameId, SkinTarget};
use crate::progress::{PerGameStats, ProgressState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SavedRecord {
    global_stats: SavedGlobalStats,
    per_game_stats: HashMap<String, SavedGameStats>,
    currency: Option<u64>,
    unlocked_achievements: Option<Vec<String>>,
    unlocked_skins: Option<Vec<String>>,
    equipped_skins: HashMap<String, Option<String>>,
    #[serde(rename = "achievements")]
    legacy_achievements: Option<Vec<String>>,
    #[serde(rename = "skinsUnlocked")]
    legacy_skins: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SavedGlobalStats {
    total_plays: Option<u64>,
    longest_session_minutes: Option<u64>,
    favorite_game: Option<String>,
    #[serde(rename = "totalGamesPlayed")]
    legacy_total_plays: Option<u64>,
    #[serde(rename = "longestSession")]
    legacy_longest_session: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SavedGameStats {
    plays: Option<u64>,
    wins: Option<u64>,
    best_score: Option<f64>,
    best_time: Option<f64>,
}

impl SavedRecord {
    /// Merge the record over the zero state
    pub(crate) fn into_state(self) -> ProgressState {
        let mut state = ProgressState::default();

        let global = self.global_stats;
        if let Some(total) = global.total_plays.or(global.legacy_total_plays) {
            state.global_stats.total_plays = total;
        }
        if let Some(minutes) = global
            .longest_session_minutes
            .or(global.legacy_longest_session)
        {
            state.global_stats.longest_session_minutes = minutes;
        }
        if let Some(game) = global.favorite_game.and_then(|g| g.parse::<GameId>().ok()) {
            state.global_stats.favorite_game = game;
        }

        for (key, saved) in self.per_game_stats {
            let Ok(game) = key.parse::<GameId>() else {
                continue;
            };
            state.per_game_stats.insert(
                game,
                PerGameStats {
                    plays: saved.plays.unwrap_or(0),
                    wins: saved.wins,
                    best_score: saved.best_score,
                    best_time: saved.best_time,
                },
            );
        }

        if let Some(currency) = self.currency {
            state.currency = currency;
        }
        if let Some(ids) = self.unlocked_achievements.or(self.legacy_achievements) {
            state.unlocked_achievements = ids.into_iter().collect();
        }
        if let Some(ids) = self.unlocked_skins.or(self.legacy_skins) {
            state.unlocked_skins = ids.into_iter().collect();
        }
        for (key, skin) in self.equipped_skins {
            if let Some(target) = SkinTarget::parse(&key) {
                state.equipped_skins.insert(target, skin);
            }
        }

        state.repair_unlocks();
        state
    }
}
