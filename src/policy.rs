//! Opponent move selection for single-player sessions.

use crate::board::Board;
use crate::cell::Cell;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// Selects a move for the engine-controlled side.
///
/// Invoked by the session after a human move in single-player mode,
/// once win and draw have been ruled out. Implementations see a
/// read-only board snapshot, never a mutable handle.
pub trait OpponentPolicy {
    /// Picks a cell for the engine's mark.
    ///
    /// Returns `None` iff the board has no empty cell left.
    fn select_move(&mut self, board: &Board) -> Option<Cell>;
}

/// Uniform-random choice among the empty cells.
///
/// Intentionally unweighted, mirroring a casual opponent; the
/// [`OpponentPolicy`] seam is where a stronger heuristic would plug in.
/// ChaCha8-backed so seeded runs replay identically.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Creates a policy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a policy with a fixed seed; same seed, same move sequence.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for RandomPolicy {
    fn select_move(&mut self, board: &Board) -> Option<Cell> {
        let cells = board.empty_cells();
        if cells.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..cells.len());
        Some(cells[idx])
    }
}

/// Picks the first empty cell in row-major scan order.
///
/// Fully deterministic; handy for tests and as the simplest possible
/// policy implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptyPolicy;

impl OpponentPolicy for FirstEmptyPolicy {
    fn select_move(&mut self, board: &Board) -> Option<Cell> {
        board.empty_cells().into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn random_policy_picks_an_empty_cell() {
        let mut board = Board::new(3);
        board.place(Cell::new(0, 0), Side::First).unwrap();
        let mut policy = RandomPolicy::seeded(7);
        for _ in 0..20 {
            let cell = policy.select_move(&board).unwrap();
            assert!(board.is_empty(cell));
        }
    }

    #[test]
    fn random_policy_is_deterministic_per_seed() {
        let board = Board::new(4);
        let picks = |seed| {
            let mut policy = RandomPolicy::seeded(seed);
            (0..10)
                .map(|_| policy.select_move(&board).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn policies_return_none_on_full_board() {
        let mut board = Board::new(2);
        for cell in board.empty_cells() {
            board.place(cell, Side::Second).unwrap();
        }
        assert_eq!(RandomPolicy::seeded(0).select_move(&board), None);
        assert_eq!(FirstEmptyPolicy.select_move(&board), None);
    }

    #[test]
    fn first_empty_policy_scans_row_major() {
        let mut board = Board::new(3);
        board.place(Cell::new(0, 0), Side::First).unwrap();
        board.place(Cell::new(0, 1), Side::Second).unwrap();
        assert_eq!(FirstEmptyPolicy.select_move(&board), Some(Cell::new(0, 2)));
    }
}
