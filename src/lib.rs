//! Arcade Progress - cross-game profile, achievements, skins and coins
//!
//! Every game in the arcade reports finished rounds to one [`ProgressStore`].
//! The store keeps play counts, wins and best records, unlocks achievements
//! (and the skins they gate), pays out coins, queues "achievement unlocked"
//! toasts and persists everything to a durable slot.
//!
//! ## Pieces
//!
//! - [`catalog`]: static games, achievements, skins and unlock rules
//! - [`progress`]: the store, its snapshots, toasts and session clock
//! - [`persistence`]: slot stores (SQLite, JSON files, memory) and the record format
//! - [`config`]: `~/.arcade/config.toml`

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod persistence;
pub mod progress;

pub use catalog::{AchievementId, GameId, SkinTarget};
pub use error::ProgressError;
pub use persistence::ProgressPersistence;
pub use progress::{GameResult, ProgressState, ProgressStore, WinOptions};
