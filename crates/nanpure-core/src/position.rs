//! Cell coordinates on a 9x9 grid.

use std::fmt::{self, Display};

/// A 0-based (row, column) cell coordinate.
///
/// Rows and columns are both in the range 0-8. Row-major order (row 0 left
/// to right, then row 1, ...) is the canonical traversal order used by the
/// solver's cell selection and by [`Position::all`].
///
/// # Examples
///
/// ```
/// use nanpure_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    ///
    /// Boxes are numbered row-major: box 0 is the top-left, box 8 the
    /// bottom-right.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Iterates over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self { row, col }))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
