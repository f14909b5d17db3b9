//! Game identifiers and skin targets
//!
//! The set of games is fixed at compile time. Every per-game map in the
//! progress state is keyed by [`GameId`] and always carries one entry per game.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// Unique identifier for each game in the arcade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Wordle,
    WordSearch,
    Sudoku,
    TicTacToe,
    Game2048,
    Memory,
    Sliding,
    Trivia,
    Connect4,
    Rpsls,
    Minesweeper,
    MadLibs,
    Snake,
    FlappyBird,
    IdleClicker,
}

impl GameId {
    /// Get the string ID used in persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wordle => "wordle",
            Self::WordSearch => "wordsearch",
            Self::Sudoku => "sudoku",
            Self::TicTacToe => "tictactoe",
            Self::Game2048 => "game2048",
            Self::Memory => "memory",
            Self::Sliding => "sliding",
            Self::Trivia => "trivia",
            Self::Connect4 => "connect4",
            Self::Rpsls => "rpsls",
            Self::Minesweeper => "minesweeper",
            Self::MadLibs => "madlibs",
            Self::Snake => "snake",
            Self::FlappyBird => "flappybird",
            Self::IdleClicker => "idleclicker",
        }
    }

    /// Human readable name shown on the profile dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wordle => "Wordle Clone",
            Self::WordSearch => "Word Search",
            Self::Sudoku => "Sudoku",
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::Game2048 => "2048",
            Self::Memory => "Memory Match",
            Self::Sliding => "Sliding Puzzle",
            Self::Trivia => "Trivia Quiz",
            Self::Connect4 => "Connect Four",
            Self::Rpsls => "RPS Lizard Spock",
            Self::Minesweeper => "Minesweeper Lite",
            Self::MadLibs => "Mad Libs Story Forge",
            Self::Snake => "Snake Classic",
            Self::FlappyBird => "Flappy Bird Clone",
            Self::IdleClicker => "Idle Clicker",
        }
    }

    /// All games, in catalog order.
    ///
    /// Favorite-game recomputation walks this order, so on equal play counts
    /// the earlier game keeps precedence.
    pub fn all() -> &'static [GameId] {
        &[
            Self::Wordle,
            Self::WordSearch,
            Self::Sudoku,
            Self::TicTacToe,
            Self::Game2048,
            Self::Memory,
            Self::Sliding,
            Self::Trivia,
            Self::Connect4,
            Self::Rpsls,
            Self::Minesweeper,
            Self::MadLibs,
            Self::Snake,
            Self::FlappyBird,
            Self::IdleClicker,
        ]
    }
}

impl FromStr for GameId {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ProgressError::UnknownGame(s.to_string()))
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a skin can be equipped: one game, or the arcade-wide theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkinTarget {
    Game(GameId),
    Global,
}

impl SkinTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game(game) => game.as_str(),
            Self::Global => "global",
        }
    }

    /// Parse a persisted key. Unknown keys return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "global" {
            return Some(Self::Global);
        }
        s.parse::<GameId>().ok().map(Self::Game)
    }

    /// Every target, games first then global
    pub fn all() -> impl Iterator<Item = SkinTarget> {
        GameId::all()
            .iter()
            .copied()
            .map(Self::Game)
            .chain(std::iter::once(Self::Global))
    }
}

impl From<GameId> for SkinTarget {
    fn from(game: GameId) -> Self {
        Self::Game(game)
    }
}

impl fmt::Display for SkinTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SkinTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SkinTarget {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown skin target: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_roundtrip() {
        for game in GameId::all() {
            assert_eq!(game.as_str().parse::<GameId>().unwrap(), *game);
        }
        assert_eq!(GameId::all().len(), 15);
    }

    #[test]
    fn test_unknown_game_fails() {
        let err = "pinball".parse::<GameId>().unwrap_err();
        assert!(matches!(err, ProgressError::UnknownGame(ref id) if id == "pinball"));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for game in GameId::all() {
            let json = serde_json::to_string(game).unwrap();
            assert_eq!(json, format!("\"{}\"", game.as_str()));
        }
    }

    #[test]
    fn test_skin_target_parse() {
        assert_eq!(SkinTarget::parse("global"), Some(SkinTarget::Global));
        assert_eq!(
            SkinTarget::parse("game2048"),
            Some(SkinTarget::Game(GameId::Game2048))
        );
        assert_eq!(SkinTarget::parse("nope"), None);
        assert_eq!(SkinTarget::all().count(), 16);
    }
}
