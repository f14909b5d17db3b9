//! Cross-game progress: stats, achievements, skins and currency
//!
//! # Usage
//!
//! ```ignore
//! let persistence = ProgressPersistence::with_default_key(SqliteSlotStore::open_default()?);
//! let mut store = ProgressStore::open(persistence);
//!
//! // A game reports a finished round
//! store.record_result(GameResult::win(GameId::Minesweeper).with_duration_ms(83_000));
//!
//! // The shell renders the latest snapshot and any pending toasts
//! let snapshot = store.snapshot();
//! let toasts = store.notifications();
//! ```

mod notifications;
mod profile;
mod session;
mod state;
mod store;

pub use notifications::{AchievementToast, DEFAULT_TOAST_DURATION_MS, NotificationQueue};
pub use profile::{AchievementCard, GameCard, ProfileSummary, SkinCard};
pub use session::SessionClock;
pub use state::{GlobalStats, PerGameStats, ProgressState, WinOptions};
pub use store::{GameResult, ProgressStore};
