//! The N×N grid of cell marks.

use crate::action::MoveError;
use crate::cell::Cell;
use crate::types::{Mark, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An exactly-sized N×N grid of marks.
///
/// The board size is fixed at creation. Cells transition from
/// [`Mark::Empty`] to [`Mark::Taken`] through [`Board::place`] and are
/// never cleared individually; [`Board::reset`] is the only way back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Creates a new board with every cell empty.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Board side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks whether the cell addresses the configured grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Gets the mark at the given cell, or `None` when out of bounds.
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(self.cells[cell.index(self.size)])
    }

    /// Checks whether a cell is in bounds and unoccupied.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Mark::Empty))
    }

    /// Places a side's mark at the given cell.
    ///
    /// This is the only mutation path besides [`Board::reset`]: the
    /// write either fully succeeds or leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] when the cell misses the grid
    /// and [`MoveError::CellOccupied`] when the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: Cell, side: Side) -> Result<(), MoveError> {
        if !self.in_bounds(cell) {
            return Err(MoveError::OutOfBounds(cell));
        }
        if !self.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }
        let idx = cell.index(self.size);
        self.cells[idx] = Mark::Taken(side);
        Ok(())
    }

    /// All marks in row-major order.
    pub fn marks(&self) -> &[Mark] {
        &self.cells
    }

    /// Empty cells in row-major scan order.
    ///
    /// The order carries no game meaning but is deterministic, which the
    /// opponent policy and tests rely on.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(idx, _)| Cell::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of empty cells remaining.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|mark| mark.is_empty()).count()
    }

    /// Returns every cell to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Mark::Empty => '.',
                    Mark::Taken(side) => side.symbol(),
                };
                f.write_str(if col > 0 { " " } else { "" })?;
                write!(f, "{symbol}")?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
