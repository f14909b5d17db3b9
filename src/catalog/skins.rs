//! Cosmetic skin definitions
//!
//! A skin with `requires_achievement` unlocks together with that achievement.
//! Skins without a requirement ship unlocked.

use super::achievements::AchievementId;
use super::games::{GameId, SkinTarget};

/// Skin definition
#[derive(Debug, Clone)]
pub struct Skin {
    pub id: &'static str,
    pub name: &'static str,
    pub target: SkinTarget,
    /// CSS background used for the preview swatch
    pub preview: &'static str,
    pub requires_achievement: Option<AchievementId>,
}

/// All skin definitions
pub static SKINS: &[Skin] = &[
    Skin {
        id: "wordle_classic",
        name: "Classic",
        target: SkinTarget::Game(GameId::Wordle),
        preview: "linear-gradient(135deg, #111827, #020617)",
        requires_achievement: None,
    },
    Skin {
        id: "wordle_neon",
        name: "Neon Grid",
        target: SkinTarget::Game(GameId::Wordle),
        preview: "linear-gradient(135deg, #22c55e, #0ea5e9)",
        requires_achievement: Some(AchievementId::WordleFirstWin),
    },
    Skin {
        id: "game2048_classic",
        name: "Classic",
        target: SkinTarget::Game(GameId::Game2048),
        preview: "linear-gradient(135deg, #fbbf24, #f97316)",
        requires_achievement: None,
    },
    Skin {
        id: "game2048_sunset",
        name: "Sunset Tiles",
        target: SkinTarget::Game(GameId::Game2048),
        preview: "linear-gradient(135deg, #fb7185, #f97316)",
        requires_achievement: Some(AchievementId::Tile1024),
    },
    Skin {
        id: "madlibs_neon_quill",
        name: "Neon Quill",
        target: SkinTarget::Game(GameId::MadLibs),
        preview: "linear-gradient(135deg, #a855f7, #22c55e)",
        requires_achievement: Some(AchievementId::MadLibsFirstStory),
    },
];

impl Skin {
    pub fn find(id: &str) -> Option<&'static Skin> {
        SKINS.iter().find(|s| s.id == id)
    }

    /// Skins that ship unlocked
    pub fn defaults() -> impl Iterator<Item = &'static Skin> {
        SKINS.iter().filter(|s| s.requires_achievement.is_none())
    }

    /// Skins gated behind the given achievement
    pub fn unlocked_by(achievement: AchievementId) -> impl Iterator<Item = &'static Skin> {
        SKINS
            .iter()
            .filter(move |s| s.requires_achievement == Some(achievement))
    }

    /// Skin equipped on a fresh profile for the given target
    pub fn default_equipped(target: SkinTarget) -> Option<&'static str> {
        match target {
            SkinTarget::Game(GameId::Wordle) => Some("wordle_classic"),
            SkinTarget::Game(GameId::Game2048) => Some("game2048_classic"),
            _ => None,
        }
    }
}
