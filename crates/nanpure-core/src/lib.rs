//! Core data structures for the nanpure Sudoku engine.
//!
//! This crate provides the grid data model shared by the solver, generator,
//! rating, and engine crates:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`DigitSet`]: a 9-bit candidate set with O(1) membership and removal
//! - [`Position`]: 0-based row/column cell coordinates
//! - [`Unit`]: the 27 rows, columns, and boxes of a 9x9 grid
//! - [`Grid`]: the 9x9 cell grid with validation, conflict detection, and
//!   candidate computation
//! - [`Difficulty`]: the four puzzle difficulty tiers
//!
//! All types here are pure data: no solving logic, no I/O, no shared state.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 is no longer a candidate anywhere in row 0, column 0, or box 0.
//! assert!(!grid.candidates(Position::new(0, 8)).contains(Digit::D5));
//! assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
//! assert!(!grid.candidates(Position::new(1, 1)).contains(Digit::D5));
//! ```

pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod unit;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridError, ParseGridError},
    position::Position,
    unit::{Unit, UnitKind},
};
