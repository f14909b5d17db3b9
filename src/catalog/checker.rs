//! Achievement unlock rules
//!
//! Play milestones are edge-triggered: they fire only on the play that makes
//! the total exactly equal to the milestone, never on a later count.

use super::achievements::AchievementId;
use super::games::GameId;

const PLAY_MILESTONES: &[(u64, AchievementId)] = &[
    (1, AchievementId::FirstPlay),
    (10, AchievementId::TenGames),
];

/// Games whose wins unlock a themed achievement
const WIN_ACHIEVEMENTS: &[(GameId, AchievementId)] = &[
    (GameId::Wordle, AchievementId::WordleFirstWin),
    (GameId::Minesweeper, AchievementId::MinesweeperFirstWin),
];

/// Achievements triggered by the play that brought the total to `total_plays`
pub fn check_play_milestones(total_plays: u64) -> Vec<AchievementId> {
    PLAY_MILESTONES
        .iter()
        .filter(|(threshold, _)| *threshold == total_plays)
        .map(|(_, id)| *id)
        .collect()
}

/// Achievements triggered by a win in `game`
pub fn check_win_achievements(game: GameId) -> Vec<AchievementId> {
    WIN_ACHIEVEMENTS
        .iter()
        .filter(|(g, _)| *g == game)
        .map(|(_, id)| *id)
        .collect()
}
