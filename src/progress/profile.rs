//! Profile dashboard read model
//!
//! Flattens a snapshot together with the catalog into what the profile page
//! renders: labelled stats, every achievement and every skin with its status.

use serde::Serialize;

use super::state::{PerGameStats, ProgressState};
use crate::catalog::{ACHIEVEMENTS, Achievement, GameId, SKINS, SkinTarget};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub total_plays: u64,
    pub longest_session_minutes: u64,
    pub favorite_game: GameId,
    pub favorite_game_label: &'static str,
    pub games: Vec<GameCard>,
    pub achievements: Vec<AchievementCard>,
    /// Size of the catalog, for the "3 / 7 unlocked" header
    pub total_achievements: usize,
    /// Currency the whole catalog pays out
    pub total_reward_available: u64,
    pub skins: Vec<SkinCard>,
    pub currency: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameCard {
    pub game: GameId,
    pub label: &'static str,
    pub stats: PerGameStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementCard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub reward_currency: Option<u64>,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkinCard {
    pub id: &'static str,
    pub name: &'static str,
    /// Game label, or "Global theme"
    pub target_label: &'static str,
    pub preview: &'static str,
    /// Achievement that unlocks it, for the "Locked - requires ..." hint
    pub requires: Option<&'static str>,
    pub unlocked: bool,
    pub equipped: bool,
}

impl ProfileSummary {
    pub fn from_state(state: &ProgressState) -> Self {
        let games = GameId::all()
            .iter()
            .map(|g| GameCard {
                game: *g,
                label: g.label(),
                stats: state.game(*g).clone(),
            })
            .collect();

        let achievements = ACHIEVEMENTS
            .iter()
            .map(|a| AchievementCard {
                id: a.id.as_str(),
                name: a.name,
                description: a.description,
                reward_currency: a.reward_currency,
                unlocked: state.is_unlocked(a.id),
            })
            .collect();

        let skins = SKINS
            .iter()
            .map(|s| SkinCard {
                id: s.id,
                name: s.name,
                target_label: match s.target {
                    SkinTarget::Game(g) => g.label(),
                    SkinTarget::Global => "Global theme",
                },
                preview: s.preview,
                requires: s.requires_achievement.map(|a| a.as_str()),
                unlocked: state.has_skin(s.id),
                equipped: state.equipped(s.target) == Some(s.id),
            })
            .collect();

        Self {
            total_plays: state.global_stats.total_plays,
            longest_session_minutes: state.global_stats.longest_session_minutes,
            favorite_game: state.global_stats.favorite_game,
            favorite_game_label: state.global_stats.favorite_game.label(),
            games,
            achievements,
            total_achievements: Achievement::total_count(),
            total_reward_available: Achievement::total_reward(),
            skins,
            currency: state.currency,
        }
    }

    pub fn unlocked_achievement_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    /// Rewards paid out by the achievements unlocked so far
    pub fn reward_earned(&self) -> u64 {
        self.achievements
            .iter()
            .filter(|a| a.unlocked)
            .filter_map(|a| a.reward_currency)
            .sum()
    }
}
