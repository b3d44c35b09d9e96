//! First-class move types.
//!
//! Moves are domain events, not side effects. They represent a side's
//! intent and can be validated independently of execution.

use crate::cell::Cell;
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// A move: a side placing its mark at a cell.
///
/// Moves are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The cell where the side places its mark.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, cell: Cell) -> Self {
        Self { side, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.cell)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is a local validation failure surfaced to the
/// immediate caller; no variant leaves the session partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell lies outside the configured grid.
    #[display("cell {} is outside the board", _0)]
    OutOfBounds(Cell),

    /// The cell is already occupied.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The move was submitted by the wrong side in two-player mode.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Side),

    /// The game already reached a terminal status.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
