//! Test utilities for technique implementations.
//!
//! This module provides [`TechniqueTester`], a harness for verifying that
//! solving techniques change the grid and candidate state as expected.
//!
//! # Example
//!
//! ```
//! use nanpure_core::{Digit, Position};
//! use nanpure_solver::{technique::NakedSingle, testing::TechniqueTester};
//!
//! TechniqueTester::from_str(
//!     "
//!     1234 5678_
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! ",
//! )
//! .apply_once(&NakedSingle::new())
//! .assert_placed(Position::new(0, 8), Digit::D9);
//! ```

use std::str::FromStr as _;

use nanpure_core::{Digit, DigitSet, Grid, Position};

use crate::{EngineContext, StepRecorder, Technique};

/// A test harness for verifying technique implementations.
///
/// `TechniqueTester` keeps the initial and current solver state, so
/// assertions can compare candidates before and after applying a
/// technique.
///
/// All methods return `self` for fluent chaining, and all assertions
/// panic with detailed messages on failure, using `#[track_caller]` to
/// report the caller's source location.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: EngineContext,
    current: EngineContext,
}

impl TechniqueTester {
    /// Creates a tester from an initial grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let initial = EngineContext::new(grid, StepRecorder::disabled());
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a grid string.
    ///
    /// The format matches [`Grid::from_str`]: digits 1-9 are clues, `.`,
    /// `_`, or `0` are blanks, whitespace is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid grid.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let grid = Grid::from_str(s).unwrap();
        Self::new(grid)
    }

    /// Applies the technique once.
    #[track_caller]
    #[must_use]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        let _ = technique.apply(&mut self.current);
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    #[track_caller]
    #[must_use]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while technique.apply(&mut self.current) {}
        self
    }

    /// Asserts that a cell was placed with the given digit.
    ///
    /// # Panics
    ///
    /// Panics if the cell was occupied initially or does not now hold
    /// `digit`.
    #[track_caller]
    #[must_use]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        assert_eq!(
            self.initial.grid().get(pos),
            None,
            "Expected initial cell at {pos} to be empty"
        );
        let placed = self.current.grid().get(pos);
        assert_eq!(
            placed,
            Some(digit),
            "Expected {digit} to be placed at {pos}, but the cell holds {placed:?}"
        );
        self
    }

    /// Asserts that a cell is still empty.
    ///
    /// # Panics
    ///
    /// Panics if the cell holds a digit.
    #[track_caller]
    #[must_use]
    pub fn assert_not_placed(self, pos: Position) -> Self {
        let placed = self.current.grid().get(pos);
        assert_eq!(
            placed, None,
            "Expected cell at {pos} to still be empty, but it holds {placed:?}"
        );
        self
    }

    /// Asserts that all the given candidates were removed from a cell.
    ///
    /// Other candidates may have been removed too; only the given ones
    /// are checked.
    ///
    /// # Panics
    ///
    /// Panics if any given digit was absent initially or is still present.
    #[track_caller]
    #[must_use]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {pos} to include {digits}, but they are {initial}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits} to be removed from {pos}, but {current} remains"
        );
        self
    }

    /// Asserts that exactly the given candidates were removed from a
    /// cell, no more and no fewer.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs from `digits`.
    #[track_caller]
    #[must_use]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "Expected exactly {digits} to be removed from {pos}, but {removed} was (initial {initial}, current {current})"
        );
        self
    }

    /// Asserts that a cell's candidates did not change.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    #[must_use]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but candidates changed from {initial} to {current}"
        );
        self
    }
}
