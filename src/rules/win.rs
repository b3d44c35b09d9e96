//! Win detection.

use crate::board::Board;
use crate::cell::Cell;
use crate::types::{Mark, Side};
use tracing::instrument;

/// Checks whether the given side has completed a line.
///
/// Exactly `2N + 2` lines are eligible on an N×N board: the N rows, the
/// N columns, the main diagonal and the anti-diagonal. No other shape
/// wins, regardless of board size. Each line is scanned once, so a full
/// check is O(N) per line.
///
/// Call this after a successful placement, for the side that just moved
/// only; the side that did not move cannot have just completed a line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, side: Side) -> bool {
    let n = board.size();
    if n == 0 {
        return false;
    }
    let taken = |row, col| board.get(Cell::new(row, col)) == Some(Mark::Taken(side));

    (0..n).any(|row| (0..n).all(|col| taken(row, col)))
        || (0..n).any(|col| (0..n).all(|row| taken(row, col)))
        || (0..n).all(|i| taken(i, i))
        || (0..n).all(|i| taken(i, n - 1 - i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, cells: &[(usize, usize)], side: Side) {
        for &(row, col) in cells {
            board.place(Cell::new(row, col), side).unwrap();
        }
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new(3);
        assert!(!has_won(&board, Side::First));
        assert!(!has_won(&board, Side::Second));
    }

    #[test]
    fn top_row_wins() {
        let mut board = Board::new(3);
        fill(&mut board, &[(0, 0), (0, 1), (0, 2)], Side::First);
        assert!(has_won(&board, Side::First));
        assert!(!has_won(&board, Side::Second));
    }

    #[test]
    fn column_wins() {
        let mut board = Board::new(3);
        fill(&mut board, &[(0, 1), (1, 1), (2, 1)], Side::Second);
        assert!(has_won(&board, Side::Second));
    }

    #[test]
    fn main_diagonal_wins() {
        let mut board = Board::new(3);
        fill(&mut board, &[(0, 0), (1, 1), (2, 2)], Side::Second);
        assert!(has_won(&board, Side::Second));
    }

    #[test]
    fn anti_diagonal_wins() {
        let mut board = Board::new(3);
        fill(&mut board, &[(0, 2), (1, 1), (2, 0)], Side::First);
        assert!(has_won(&board, Side::First));
    }

    #[test]
    fn incomplete_line_does_not_win() {
        let mut board = Board::new(3);
        fill(&mut board, &[(0, 0), (0, 1), (2, 2)], Side::First);
        assert!(!has_won(&board, Side::First));
    }

    #[test]
    fn mixed_line_does_not_win() {
        let mut board = Board::new(3);
        fill(&mut board, &[(0, 0), (0, 1)], Side::First);
        fill(&mut board, &[(0, 2)], Side::Second);
        assert!(!has_won(&board, Side::First));
        assert!(!has_won(&board, Side::Second));
    }

    #[test]
    fn diagonals_detected_at_even_size() {
        let mut board = Board::new(4);
        fill(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3)], Side::First);
        assert!(has_won(&board, Side::First));

        let mut board = Board::new(4);
        fill(&mut board, &[(0, 3), (1, 2), (2, 1), (3, 0)], Side::Second);
        assert!(has_won(&board, Side::Second));
    }

    #[test]
    fn no_short_lines_at_larger_size() {
        // Three in a row on a 5x5 board is not a win.
        let mut board = Board::new(5);
        fill(&mut board, &[(2, 0), (2, 1), (2, 2)], Side::First);
        assert!(!has_won(&board, Side::First));
    }
}
