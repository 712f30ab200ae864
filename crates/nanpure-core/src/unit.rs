//! Rows, columns, and boxes: the 27 units of a 9x9 grid.

use derive_more::Display;

use crate::Position;

/// The kind of a [`Unit`].
///
/// The `Display` output (`row`, `col`, `box`) is the qualifier that appears
/// inside technique labels such as `Hidden Single (row)`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// A horizontal row.
    #[display("row")]
    Row,
    /// A vertical column.
    #[display("col")]
    Column,
    /// A 3x3 box.
    #[display("box")]
    Box,
}

/// One of the 27 groups of nine cells in which each digit must appear
/// exactly once: 9 rows, 9 columns, and 9 boxes.
///
/// Units are purely structural; their member cells are computed, never
/// stored per grid instance.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Position, Unit};
///
/// assert_eq!(Unit::all().count(), 27);
///
/// let cells = Unit::Box(4).cells();
/// assert_eq!(cells[0], Position::new(3, 3));
/// assert_eq!(cells[8], Position::new(5, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// The row with the given index (0-8).
    Row(u8),
    /// The column with the given index (0-8).
    Column(u8),
    /// The box with the given index (0-8, row-major).
    Box(u8),
}

impl Unit {
    /// The total number of units.
    pub const COUNT: usize = 27;

    /// Iterates over all 27 units: rows 0-8, then columns 0-8, then boxes
    /// 0-8.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9)
            .map(Unit::Row)
            .chain((0..9).map(Unit::Column))
            .chain((0..9).map(Unit::Box))
    }

    /// Returns the kind of this unit.
    #[must_use]
    pub const fn kind(self) -> UnitKind {
        match self {
            Self::Row(_) => UnitKind::Row,
            Self::Column(_) => UnitKind::Column,
            Self::Box(_) => UnitKind::Box,
        }
    }

    /// Returns the nine member cells of this unit.
    ///
    /// Rows and columns are ordered by the crossing index; boxes are
    /// ordered row-major within the box.
    ///
    /// # Panics
    ///
    /// Panics if the unit index is 9 or greater.
    #[must_use]
    pub fn cells(self) -> [Position; 9] {
        let mut cells = [Position::default(); 9];
        match self {
            Self::Row(row) => {
                for (col, cell) in (0..9).zip(&mut cells) {
                    *cell = Position::new(row, col);
                }
            }
            Self::Column(col) => {
                for (row, cell) in (0..9).zip(&mut cells) {
                    *cell = Position::new(row, col);
                }
            }
            Self::Box(index) => {
                assert!(index < 9, "box index out of range");
                let base_row = (index / 3) * 3;
                let base_col = (index % 3) * 3;
                for (i, cell) in (0..9).zip(&mut cells) {
                    *cell = Position::new(base_row + i / 3, base_col + i % 3);
                }
            }
        }
        cells
    }

    /// Returns `true` if the unit contains the given position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row(row) => pos.row() == row,
            Self::Column(col) => pos.col() == col,
            Self::Box(index) => pos.box_index() == index,
        }
    }
}
