//! Achievement definitions and metadata
//!
//! All achievements are defined here with their owning game and currency reward.

use super::games::GameId;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    // Global milestones
    FirstPlay,
    TenGames,

    // Game achievements
    WordleFirstWin,
    MinesweeperFirstWin,
    TriviaPerfect,
    Tile1024,
    MadLibsFirstStory,
}

impl AchievementId {
    /// Get the string ID for persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstPlay => "first_play",
            Self::TenGames => "ten_games",
            Self::WordleFirstWin => "wordle_first_win",
            Self::MinesweeperFirstWin => "minesweeper_first_win",
            Self::TriviaPerfect => "trivia_perfect",
            Self::Tile1024 => "2048_1024",
            Self::MadLibsFirstStory => "madlibs_first_story",
        }
    }

    /// Parse from a persisted or caller-supplied string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_play" => Some(Self::FirstPlay),
            "ten_games" => Some(Self::TenGames),
            "wordle_first_win" => Some(Self::WordleFirstWin),
            "minesweeper_first_win" => Some(Self::MinesweeperFirstWin),
            "trivia_perfect" => Some(Self::TriviaPerfect),
            "2048_1024" => Some(Self::Tile1024),
            "madlibs_first_story" => Some(Self::MadLibsFirstStory),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstPlay,
            Self::TenGames,
            Self::WordleFirstWin,
            Self::MinesweeperFirstWin,
            Self::TriviaPerfect,
            Self::Tile1024,
            Self::MadLibsFirstStory,
        ]
    }
}

/// Which part of the arcade an achievement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementScope {
    Global,
    Game(GameId),
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub reward_currency: Option<u64>,
    pub scope: AchievementScope,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === GLOBAL ===
    Achievement {
        id: AchievementId::FirstPlay,
        name: "First Token Drop",
        description: "Play your first game in the arcade.",
        reward_currency: Some(10),
        scope: AchievementScope::Global,
    },
    Achievement {
        id: AchievementId::TenGames,
        name: "Warming Up",
        description: "Play 10 games across the arcade.",
        reward_currency: Some(25),
        scope: AchievementScope::Global,
    },
    // === GAMES ===
    Achievement {
        id: AchievementId::WordleFirstWin,
        name: "Word Wrangler",
        description: "Win a Wordle game.",
        reward_currency: Some(20),
        scope: AchievementScope::Game(GameId::Wordle),
    },
    Achievement {
        id: AchievementId::MinesweeperFirstWin,
        name: "Bomb Squad",
        description: "Win a game of Minesweeper.",
        reward_currency: Some(25),
        scope: AchievementScope::Game(GameId::Minesweeper),
    },
    Achievement {
        id: AchievementId::TriviaPerfect,
        name: "Know-It-All",
        description: "Get a perfect score in Trivia.",
        reward_currency: Some(40),
        scope: AchievementScope::Game(GameId::Trivia),
    },
    Achievement {
        id: AchievementId::Tile1024,
        name: "Almost There",
        description: "Reach the 1024 tile in 2048.",
        reward_currency: Some(30),
        scope: AchievementScope::Game(GameId::Game2048),
    },
    Achievement {
        id: AchievementId::MadLibsFirstStory,
        name: "Story Spinner",
        description: "Complete your first Mad Libs story.",
        reward_currency: Some(15),
        scope: AchievementScope::Game(GameId::MadLibs),
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Look up a definition by its string ID. Unknown IDs return `None`.
    pub fn find(id: &str) -> Option<&'static Achievement> {
        AchievementId::from_str(id).map(Self::get)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }

    /// Get total possible currency from all achievements
    pub fn total_reward() -> u64 {
        ACHIEVEMENTS.iter().filter_map(|a| a.reward_currency).sum()
    }
}
