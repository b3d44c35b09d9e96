//! Cell coordinates on the board.

use serde::{Deserialize, Serialize};

/// A 0-indexed coordinate on an N×N board.
///
/// `row` and `col` must each lie in `[0, N)` to address a cell; the
/// board re-validates bounds on every access. Ordering is row-major
/// (row first, then column), matching the board's scan order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Cell {
    /// Creates a cell coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index into a board of the given size.
    ///
    /// Callers must have checked bounds first.
    pub(crate) fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 0)];
        cells.sort();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(0, 2), Cell::new(1, 0)]
        );
    }

    #[test]
    fn flat_index() {
        assert_eq!(Cell::new(0, 0).index(3), 0);
        assert_eq!(Cell::new(1, 2).index(3), 5);
        assert_eq!(Cell::new(2, 2).index(3), 8);
    }
}
