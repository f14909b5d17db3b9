//! Progress state and its pure transitions
//!
//! The store never mutates a published snapshot. It clones the latest one,
//! applies the transitions below to the copy, and publishes the copy.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Achievement, AchievementId, GameId, Skin, SkinTarget};

/// Arcade-wide aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_plays: u64,
    /// High-water mark, never decreases
    pub longest_session_minutes: u64,
    pub favorite_game: GameId,
}

impl Default for GlobalStats {
    fn default() -> Self {
        Self {
            total_plays: 0,
            longest_session_minutes: 0,
            favorite_game: GameId::Wordle,
        }
    }
}

/// Statistics for a single game
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerGameStats {
    pub plays: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_score: Option<f64>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<f64>,
}

/// Optional details reported with a win
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WinOptions {
    pub score: Option<f64>,
    pub time_seconds: Option<f64>,
}

impl WinOptions {
    pub fn score(score: f64) -> Self {
        Self {
            score: Some(score),
            time_seconds: None,
        }
    }

    pub fn time(time_seconds: f64) -> Self {
        Self {
            score: None,
            time_seconds: Some(time_seconds),
        }
    }
}

/// Everything the arcade remembers about the player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub global_stats: GlobalStats,
    pub per_game_stats: BTreeMap<GameId, PerGameStats>,
    pub currency: u64,
    pub unlocked_achievements: BTreeSet<String>,
    pub unlocked_skins: BTreeSet<String>,
    pub equipped_skins: BTreeMap<SkinTarget, Option<String>>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            global_stats: GlobalStats::default(),
            per_game_stats: GameId::all()
                .iter()
                .map(|g| (*g, PerGameStats::default()))
                .collect(),
            currency: 0,
            unlocked_achievements: BTreeSet::new(),
            unlocked_skins: Skin::defaults().map(|s| s.id.to_string()).collect(),
            equipped_skins: SkinTarget::all()
                .map(|t| (t, Skin::default_equipped(t).map(str::to_string)))
                .collect(),
        }
    }
}

impl ProgressState {
    pub fn game(&self, game: GameId) -> &PerGameStats {
        self.per_game_stats
            .get(&game)
            .expect("per-game stats are populated for every game")
    }

    pub fn is_unlocked(&self, achievement: AchievementId) -> bool {
        self.unlocked_achievements.contains(achievement.as_str())
    }

    pub fn has_skin(&self, skin_id: &str) -> bool {
        self.unlocked_skins.contains(skin_id)
    }

    pub fn equipped(&self, target: SkinTarget) -> Option<&str> {
        self.equipped_skins.get(&target).and_then(|s| s.as_deref())
    }

    fn game_mut(&mut self, game: GameId) -> &mut PerGameStats {
        self.per_game_stats.entry(game).or_default()
    }

    /// Count one play of `game` and refresh the favorite game
    pub(crate) fn apply_play(&mut self, game: GameId) {
        let stats = self.game_mut(game);
        stats.plays = stats.plays.saturating_add(1);
        self.global_stats.total_plays = self.global_stats.total_plays.saturating_add(1);
        self.recompute_favorite();
    }

    /// Only a strictly greater play count replaces the current favorite.
    fn recompute_favorite(&mut self) {
        let mut favorite = self.global_stats.favorite_game;
        let mut max_plays = self.per_game_stats.get(&favorite).map_or(0, |s| s.plays);

        for game in GameId::all() {
            let plays = self.per_game_stats.get(game).map_or(0, |s| s.plays);
            if plays > max_plays {
                max_plays = plays;
                favorite = *game;
            }
        }

        self.global_stats.favorite_game = favorite;
    }

    /// Count a win and merge the reported score (max) and time (min)
    pub(crate) fn apply_win(&mut self, game: GameId, options: WinOptions) {
        let stats = self.game_mut(game);
        stats.wins = Some(stats.wins.unwrap_or(0).saturating_add(1));

        if let Some(score) = options.score.filter(|s| s.is_finite()) {
            stats.best_score = Some(stats.best_score.map_or(score, |best| best.max(score)));
        }
        if let Some(time) = options.time_seconds.filter(|t| t.is_finite()) {
            stats.best_time = Some(stats.best_time.map_or(time, |best| best.min(time)));
        }
    }

    /// Unlock an achievement, pay its reward and unlock the skins it gates.
    ///
    /// Returns `false` without touching anything if it was already unlocked.
    pub(crate) fn apply_unlock(&mut self, achievement: AchievementId) -> bool {
        if !self.unlocked_achievements.insert(achievement.as_str().to_string()) {
            return false;
        }

        let def = Achievement::get(achievement);
        if let Some(reward) = def.reward_currency {
            self.currency = self.currency.saturating_add(reward);
        }
        self.cascade_skins(achievement);
        debug!(achievement = achievement.as_str(), currency = self.currency, "achievement unlocked");
        true
    }

    fn cascade_skins(&mut self, achievement: AchievementId) {
        for skin in Skin::unlocked_by(achievement) {
            if self.unlocked_skins.insert(skin.id.to_string()) {
                debug!(skin = skin.id, achievement = achievement.as_str(), "skin unlocked");
            }
        }
    }

    /// Add `amount` (possibly negative) to the balance, flooring at zero.
    ///
    /// Returns `false` when the balance did not change.
    pub(crate) fn apply_currency(&mut self, amount: i64) -> bool {
        let next = if amount >= 0 {
            self.currency.saturating_add(amount.unsigned_abs())
        } else {
            self.currency.saturating_sub(amount.unsigned_abs())
        };
        if next == self.currency {
            return false;
        }
        self.currency = next;
        true
    }

    /// Raise the longest-session high-water mark. Returns `true` if it moved.
    pub(crate) fn apply_session_minutes(&mut self, minutes: u64) -> bool {
        if minutes <= self.global_stats.longest_session_minutes {
            return false;
        }
        self.global_stats.longest_session_minutes = minutes;
        true
    }

    /// Restore invariants a record written by an older catalog may be missing:
    /// default skins present and every achievement-gated skin unlocked.
    pub(crate) fn repair_unlocks(&mut self) {
        for skin in Skin::defaults() {
            self.unlocked_skins.insert(skin.id.to_string());
        }
        let unlocked: Vec<AchievementId> = self
            .unlocked_achievements
            .iter()
            .filter_map(|id| AchievementId::from_str(id))
            .collect();
        for achievement in unlocked {
            self.cascade_skins(achievement);
        }
    }
}
