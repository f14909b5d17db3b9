//! Progress Store - the single writer of [`ProgressState`]
//!
//! Every mutation clones the latest snapshot, applies its transition, runs the
//! unlock rules, then publishes the new snapshot, queues toasts and saves.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::notifications::{AchievementToast, DEFAULT_TOAST_DURATION_MS, NotificationQueue};
use super::profile::ProfileSummary;
use super::session::SessionClock;
use super::state::{ProgressState, WinOptions};
use crate::catalog::{
    AchievementId, GameId, Skin, SkinTarget, check_play_milestones, check_win_achievements,
};
use crate::clock::{Clock, SystemClock};
use crate::config::{ArcadeConfig, StorageBackend};
use crate::error::ProgressError;
use crate::persistence::{
    FileSlotStore, MemorySlotStore, ProgressPersistence, SqliteSlotStore,
};

/// A finished game as reported by the game itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameResult {
    pub game: GameId,
    pub win: bool,
    pub score: Option<f64>,
    pub duration_ms: Option<u64>,
}

impl GameResult {
    pub fn loss(game: GameId) -> Self {
        Self {
            game,
            win: false,
            score: None,
            duration_ms: None,
        }
    }

    pub fn win(game: GameId) -> Self {
        Self {
            win: true,
            ..Self::loss(game)
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Owner of all cross-game progress
pub struct ProgressStore {
    state: Arc<ProgressState>,
    persistence: ProgressPersistence,
    notifications: NotificationQueue,
    session: SessionClock,
    publisher: watch::Sender<Arc<ProgressState>>,
}

impl ProgressStore {
    /// Load state from `persistence` and start the session on the system clock
    pub fn open(persistence: ProgressPersistence) -> Self {
        Self::with_clock(persistence, Arc::new(SystemClock), DEFAULT_TOAST_DURATION_MS)
    }

    /// Load state from `persistence` with an explicit clock and toast lifetime
    pub fn with_clock(
        persistence: ProgressPersistence,
        clock: Arc<dyn Clock>,
        toast_duration_ms: i64,
    ) -> Self {
        let state = Arc::new(persistence.load());
        let session = SessionClock::new(clock.clone());
        session.started_at_ms();
        let (publisher, _) = watch::channel(state.clone());

        Self {
            state,
            persistence,
            notifications: NotificationQueue::new(clock, toast_duration_ms),
            session,
            publisher,
        }
    }

    /// Build a store from configuration (storage backend, slot key, toast lifetime)
    pub fn from_config(config: &ArcadeConfig) -> anyhow::Result<Self> {
        let storage = &config.settings.storage;
        let key = storage.slot_key.clone();
        let persistence = match storage.backend {
            StorageBackend::Sqlite => {
                let path = storage.resolved_path();
                ProgressPersistence::new(SqliteSlotStore::open(&path)?, key)
            }
            StorageBackend::File => {
                ProgressPersistence::new(FileSlotStore::new(storage.resolved_path()), key)
            }
            StorageBackend::Memory => ProgressPersistence::new(MemorySlotStore::new(), key),
        };
        info!(backend = ?storage.backend, slot = %persistence.key(), "Opening progress store");

        Ok(Self::with_clock(
            persistence,
            Arc::new(SystemClock),
            config.settings.notifications.toast_duration_ms,
        ))
    }

    // ========================================
    // READ INTERFACE
    // ========================================

    /// Current immutable snapshot
    pub fn snapshot(&self) -> Arc<ProgressState> {
        self.state.clone()
    }

    /// Receiver that sees every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Arc<ProgressState>> {
        self.publisher.subscribe()
    }

    /// Toasts that have not expired yet, oldest first
    pub fn notifications(&self) -> Vec<AchievementToast> {
        self.notifications.pending()
    }

    /// Drop every queued toast (e.g. on shutdown)
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Read model for the profile dashboard
    pub fn profile(&self) -> ProfileSummary {
        ProfileSummary::from_state(&self.state)
    }

    // ========================================
    // REPORTING INTERFACE
    // ========================================

    /// Count one play of `game`. Returns achievements unlocked by it.
    pub fn record_play(&mut self, game: GameId) -> Vec<AchievementId> {
        let mut next = self.draft();
        next.apply_play(game);

        let milestones = check_play_milestones(next.global_stats.total_plays);
        let unlocked = unlock_all(&mut next, milestones);
        next.apply_session_minutes(self.session.elapsed_minutes());

        debug!(game = %game, total_plays = next.global_stats.total_plays, "play recorded");
        self.commit(next, &unlocked);
        unlocked
    }

    /// Count a win for `game`, merging score and time into its bests
    pub fn record_win(&mut self, game: GameId, options: WinOptions) -> Vec<AchievementId> {
        let mut next = self.draft();
        next.apply_win(game, options);

        let unlocked = unlock_all(&mut next, check_win_achievements(game));
        next.apply_session_minutes(self.session.elapsed_minutes());

        debug!(game = %game, score = ?options.score, time = ?options.time_seconds, "win recorded");
        self.commit(next, &unlocked);
        unlocked
    }

    /// Record a finished game: always a play, plus a win when `result.win`.
    ///
    /// The duration is reported as whole seconds, rounded to nearest.
    pub fn record_result(&mut self, result: GameResult) -> Vec<AchievementId> {
        let mut unlocked = self.record_play(result.game);

        if result.win {
            let time_seconds = result
                .duration_ms
                .map(|ms| (ms as f64 / 1000.0).round());
            unlocked.extend(self.record_win(
                result.game,
                WinOptions {
                    score: result.score,
                    time_seconds,
                },
            ));
        }

        unlocked
    }

    /// Adjust the balance by `amount`, never below zero. Returns the new balance.
    pub fn add_currency(&mut self, amount: i64) -> u64 {
        self.add_currency_with_reason(amount, None)
    }

    /// Same as [`add_currency`](Self::add_currency), logging why
    pub fn add_currency_with_reason(&mut self, amount: i64, reason: Option<&str>) -> u64 {
        if amount == 0 {
            return self.state.currency;
        }

        let mut next = self.draft();
        if !next.apply_currency(amount) {
            return self.state.currency;
        }

        debug!(amount, reason = reason.unwrap_or("-"), balance = next.currency, "currency adjusted");
        let balance = next.currency;
        self.commit(next, &[]);
        balance
    }

    /// Unlock an achievement by id.
    ///
    /// Returns `true` only on the first unlock; repeats and ids missing from the
    /// catalog change nothing.
    pub fn unlock_achievement(&mut self, achievement_id: &str) -> bool {
        let Some(id) = AchievementId::from_str(achievement_id) else {
            debug!(achievement = achievement_id, "ignoring unknown achievement");
            return false;
        };
        if self.state.is_unlocked(id) {
            return false;
        }

        let mut next = self.draft();
        next.apply_unlock(id);
        self.commit(next, &[id]);
        true
    }

    /// Equip `skin_id` (or clear with `None`) on `target` without any checks
    pub fn set_equipped_skin(&mut self, target: SkinTarget, skin_id: Option<&str>) {
        if self.state.equipped(target) == skin_id {
            return;
        }

        let mut next = self.draft();
        next.equipped_skins
            .insert(target, skin_id.map(str::to_string));
        self.commit(next, &[]);
    }

    /// Equip a skin after checking it exists, is unlocked and belongs to `target`
    pub fn equip_skin(&mut self, target: SkinTarget, skin_id: &str) -> Result<(), ProgressError> {
        let skin = Skin::find(skin_id).ok_or_else(|| ProgressError::UnknownSkin(skin_id.to_string()))?;
        if skin.target != target {
            return Err(ProgressError::SkinTargetMismatch {
                skin: skin_id.to_string(),
                target,
            });
        }
        if !self.state.has_skin(skin_id) {
            return Err(ProgressError::SkinLocked(skin_id.to_string()));
        }

        self.set_equipped_skin(target, Some(skin_id));
        Ok(())
    }

    // ========================================
    // INTERNALS
    // ========================================

    fn draft(&self) -> ProgressState {
        (*self.state).clone()
    }

    /// Publish `next`, queue toasts for `unlocked`, and save.
    ///
    /// A failed save is logged; the in-memory snapshot stays authoritative.
    fn commit(&mut self, next: ProgressState, unlocked: &[AchievementId]) {
        let next = Arc::new(next);
        self.state = next.clone();
        self.publisher.send_replace(next.clone());

        for id in unlocked {
            self.notifications.enqueue(id.as_str());
        }

        if let Err(e) = self.persistence.save(&next) {
            warn!(slot = %self.persistence.key(), "Failed to save progress: {:#}", e);
        }
    }
}

fn unlock_all(state: &mut ProgressState, candidates: Vec<AchievementId>) -> Vec<AchievementId> {
    candidates
        .into_iter()
        .filter(|id| state.apply_unlock(*id))
        .collect()
}
