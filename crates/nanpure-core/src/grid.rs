//! The 9x9 Sudoku grid.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Position, Unit};

/// A 9x9 Sudoku grid.
///
/// Each cell holds `Option<Digit>`: `None` is an empty cell (wire value 0),
/// `Some` is a placed digit 1-9. A grid is *complete* when no cell is empty
/// and *solved* when it is complete and no unit contains a duplicate.
///
/// Grids are plain values: cloning produces an independent copy, and no
/// grid is ever shared between solver invocations.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::empty();
/// assert_eq!(grid.clue_count(), 0);
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(!grid.has_conflicts());
/// ```
///
/// # Grid strings
///
/// Grids parse from strings where `1`-`9` are clues, `_`, `.`, or `0` are
/// blanks, and whitespace is ignored:
///
/// ```
/// use nanpure_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.clue_count(), 30);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

/// Error returned when wire input cannot form a [`Grid`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The input is not exactly 9 rows of 9 values.
    #[display("grid must be exactly 9 rows of 9 values")]
    Shape,
    /// A value is outside the range 0-9.
    #[display("cell values must be integers in 0..=9")]
    ValueRange,
}

/// Error returned when a grid string cannot be parsed.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// The string contains a character that is not a digit, blank marker,
    /// or whitespace.
    #[display("unexpected character {_0:?} in grid string")]
    #[error(ignore)]
    UnexpectedChar(char),
    /// The string does not contain exactly 81 cells.
    #[display("grid string must contain exactly 81 cells, got {_0}")]
    #[error(ignore)]
    CellCount(usize),
}

impl Grid {
    /// The number of rows (and columns) of the grid.
    pub const SIZE: usize = 9;

    /// The total number of cells.
    pub const CELLS: usize = 81;

    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Builds a grid from wire values, validating shape and range.
    ///
    /// The input must be exactly 9 rows of 9 integers in `0..=9`, where 0
    /// is an empty cell. The conversion deep-copies the input; the caller's
    /// data is never retained or mutated.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Shape`] for anything other than 9 rows of 9
    /// values, and [`GridError::ValueRange`] for values outside `0..=9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::{Grid, GridError};
    ///
    /// let rows: Vec<Vec<i64>> = (0..9).map(|_| vec![0; 9]).collect();
    /// assert_eq!(Grid::try_from_values(&rows), Ok(Grid::empty()));
    ///
    /// let short: Vec<Vec<i64>> = (0..8).map(|_| vec![0; 9]).collect();
    /// assert_eq!(Grid::try_from_values(&short), Err(GridError::Shape));
    /// ```
    pub fn try_from_values(rows: &[Vec<i64>]) -> Result<Self, GridError> {
        if rows.len() != Self::SIZE {
            return Err(GridError::Shape);
        }
        let mut grid = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != Self::SIZE {
                return Err(GridError::Shape);
            }
            for (c, &value) in row.iter().enumerate() {
                grid.cells[r][c] = match value {
                    0 => None,
                    1..=9 => {
                        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "range-checked above")]
                        Digit::try_from_value(value as u8)
                    }
                    _ => return Err(GridError::ValueRange),
                };
            }
        }
        Ok(grid)
    }

    /// Returns the grid as wire values: 9 rows of 9 integers, 0 for empty.
    #[must_use]
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.map_or(0, Digit::value)).collect())
            .collect()
    }

    /// Returns the digit at a position, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Sets or clears the cell at a position.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.row() as usize][pos.col() as usize] = value;
    }

    /// Returns `true` if any row, column, or box contains a digit more than
    /// once. Empty cells never conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::empty();
    /// grid.set(Position::new(0, 0), Some(Digit::D5));
    /// grid.set(Position::new(0, 1), Some(Digit::D5));
    /// assert!(grid.has_conflicts());
    /// ```
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        Unit::all().any(|unit| {
            let mut seen = DigitSet::EMPTY;
            unit.cells().into_iter().any(|pos| {
                self.get(pos).is_some_and(|digit| {
                    let duplicate = seen.contains(digit);
                    seen.insert(digit);
                    duplicate
                })
            })
        })
    }

    /// Returns the candidate digits for an empty cell: the digits 1-9 not
    /// present in the cell's row, column, or box.
    ///
    /// Occupied cells have no candidates; the empty set is returned.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        if self.get(pos).is_some() {
            return DigitSet::EMPTY;
        }
        let mut used = DigitSet::EMPTY;
        for unit in [
            Unit::Row(pos.row()),
            Unit::Column(pos.col()),
            Unit::Box(pos.box_index()),
        ] {
            for cell in unit.cells() {
                if let Some(digit) = self.get(cell) {
                    used.insert(digit);
                }
            }
        }
        DigitSet::ALL.difference(used)
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is complete.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos).is_none())
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns `true` if the grid is complete and free of conflicts.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && !self.has_conflicts()
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos).is_some()).count()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut grid = Self::empty();
        let mut index = 0_usize;
        for ch in s.chars() {
            let cell = match ch {
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation, reason = "ASCII digit")]
                    Digit::try_from_value(ch as u8 - b'0')
                }
                '0' | '.' | '_' => None,
                ch if ch.is_whitespace() => continue,
                ch => return Err(ParseGridError::UnexpectedChar(ch)),
            };
            if index < Self::CELLS {
                #[expect(clippy::cast_possible_truncation, reason = "index < 81")]
                let pos = Position::new(index as u8 / 9, index as u8 % 9);
                grid.set(pos, cell);
            }
            index += 1;
        }
        if index != Self::CELLS {
            return Err(ParseGridError::CellCount(index));
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                f.write_char('\n')?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    f.write_char(' ')?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_char('_')?,
                }
            }
        }
        Ok(())
    }
}
