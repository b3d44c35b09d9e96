//! Core domain types for the grid game engine.

use serde::{Deserialize, Serialize};

/// One of the two competing sides in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The side configured to open the game (historically "X").
    First,
    /// The other side (historically "O").
    Second,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Display symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Occupancy state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// No side has claimed the cell.
    Empty,
    /// Cell claimed by a side.
    Taken(Side),
}

impl Mark {
    /// Returns the side holding this mark, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::Taken(side) => Some(side),
        }
    }

    /// Checks whether the mark is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

/// How a session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One human side; the engine replies for the other side.
    SinglePlayer,
    /// Two external actors alternate turns.
    TwoPlayer,
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Side),
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning side, if the game was won.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(side) => write!(f, "{side} wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent(), Side::First);
        assert_eq!(Side::First.opponent().opponent(), Side::First);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won(Side::First).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::Won(Side::Second).winner(), Some(Side::Second));
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
