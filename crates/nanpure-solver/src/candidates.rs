//! Per-cell candidate bookkeeping.

use nanpure_core::{Digit, DigitSet, Grid, Position};

/// The candidate set of every cell of a grid.
///
/// Built once from a [`Grid`] and then maintained incrementally: placements
/// clear the placed cell and remove the digit from its peers, technique
/// eliminations remove individual candidates. Occupied cells always hold
/// the empty set.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Grid, Position};
/// use nanpure_solver::CandidateGrid;
///
/// let mut grid = Grid::empty();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// let candidates = CandidateGrid::from_grid(&grid);
/// assert!(candidates.at(Position::new(0, 0)).is_empty());
/// assert!(!candidates.at(Position::new(0, 8)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [[DigitSet; 9]; 9],
}

impl CandidateGrid {
    /// Computes the candidates of every cell of `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut cells = [[DigitSet::EMPTY; 9]; 9];
        for pos in Position::all() {
            cells[pos.row() as usize][pos.col() as usize] = grid.candidates(pos);
        }
        Self { cells }
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn at(&self, pos: Position) -> DigitSet {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Removes a candidate from a cell.
    ///
    /// Returns `true` if the candidate was present.
    pub const fn remove(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.row() as usize][pos.col() as usize].remove(digit)
    }

    /// Clears all candidates of a cell. Used when a digit is placed there.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.row() as usize][pos.col() as usize] = DigitSet::EMPTY;
    }
}
