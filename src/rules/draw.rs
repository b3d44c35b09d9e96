//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// Checks whether every cell on the board is occupied.
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.marks().iter().all(|mark| !mark.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::types::Side;

    #[test]
    fn empty_board_is_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn partial_board_is_not_full() {
        let mut board = Board::new(3);
        board.place(Cell::new(1, 1), Side::First).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn fully_marked_board_is_full() {
        let mut board = Board::new(2);
        for row in 0..2 {
            for col in 0..2 {
                board.place(Cell::new(row, col), Side::First).unwrap();
            }
        }
        assert!(is_full(&board));
    }
}
