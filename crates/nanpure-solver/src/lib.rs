//! Sudoku solving for the nanpure engine.
//!
//! The solver works in two phases:
//!
//! 1. A logical phase applies human-style techniques in escalation order
//!    (singles, locked candidates, tuples, X-Wing), restarting from the
//!    cheapest technique after every change.
//! 2. When no technique makes progress, a depth-first backtracking search
//!    completes the grid.
//!
//! Both phases feed [`Metrics`], which the rating crate turns into a
//! difficulty score. An explained solve additionally records every
//! placement and candidate elimination as [`Step`]s.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Grid;
//! use nanpure_solver::solve;
//!
//! let puzzle: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let outcome = solve(&puzzle);
//! assert!(outcome.solution.is_some_and(|grid| grid.is_solved()));
//! ```

mod candidates;
mod engine;
mod metrics;
mod recorder;
mod search;
mod solve;
pub mod technique;
pub mod testing;

pub use self::{
    candidates::CandidateGrid,
    engine::{EngineContext, run_to_quiescence},
    metrics::Metrics,
    recorder::{CellDigit, Step, StepRecorder},
    search::count_solutions,
    solve::{SolveOutcome, explain, solve},
    technique::{BoxedTechnique, Technique, TechniqueKind, all_techniques},
};
