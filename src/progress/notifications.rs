//! Transient "achievement unlocked" toasts
//!
//! Entries are never persisted. Each one carries its own deadline and drops
//! out of every read once the deadline has passed; the queue prunes itself
//! whenever it is written.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::catalog::{Achievement, AchievementId};
use crate::clock::Clock;

/// Default lifetime of a toast
pub const DEFAULT_TOAST_DURATION_MS: i64 = 4_000;

/// One queued unlock notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementToast {
    pub id: Uuid,
    pub achievement: AchievementId,
    pub label: &'static str,
    pub enqueued_at_ms: i64,
    pub expires_at_ms: i64,
}

/// FIFO of toasts with per-entry expiry
pub struct NotificationQueue {
    entries: VecDeque<AchievementToast>,
    clock: Arc<dyn Clock>,
    ttl_ms: i64,
}

impl NotificationQueue {
    pub fn new(clock: Arc<dyn Clock>, ttl_ms: i64) -> Self {
        Self {
            entries: VecDeque::new(),
            clock,
            ttl_ms,
        }
    }

    /// Queue a toast for `achievement_id`. Unknown ids are ignored.
    pub fn enqueue(&mut self, achievement_id: &str) -> Option<Uuid> {
        let def = Achievement::find(achievement_id)?;
        let now = self.clock.now_ms();
        self.prune_at(now);

        let toast = AchievementToast {
            id: Uuid::new_v4(),
            achievement: def.id,
            label: def.name,
            enqueued_at_ms: now,
            expires_at_ms: now.saturating_add(self.ttl_ms),
        };
        debug!(toast = %toast.id, achievement = achievement_id, "toast queued");
        let id = toast.id;
        self.entries.push_back(toast);
        Some(id)
    }

    /// Toasts that have not expired yet, oldest first
    pub fn pending(&self) -> Vec<AchievementToast> {
        let now = self.clock.now_ms();
        self.entries
            .iter()
            .filter(|t| t.expires_at_ms > now)
            .cloned()
            .collect()
    }

    /// Drop expired entries. Returns how many were removed.
    pub fn expire(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.prune_at(now)
    }

    /// Drop everything, expired or not
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending().is_empty()
    }

    fn prune_at(&mut self, now: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|t| t.expires_at_ms > now);
        before - self.entries.len()
    }
}
