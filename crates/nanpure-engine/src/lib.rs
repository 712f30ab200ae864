//! The nanpure Sudoku engine surface.
//!
//! Four pure operations over wire-format grids (9x9 arrays of integers,
//! 0 for empty cells):
//!
//! - [`generate`]: build a puzzle of a requested difficulty
//! - [`solve`]: complete a puzzle and report the effort spent
//! - [`explain`]: complete a puzzle while recording every step
//! - [`evaluate`]: rate a puzzle's difficulty
//!
//! Every operation validates its input, never mutates it, and returns a
//! serializable response body from [`wire`].
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Difficulty;
//!
//! let generated = nanpure_engine::generate(Difficulty::Easy, true)?;
//! let rows: Vec<Vec<i64>> = generated
//!     .puzzle
//!     .iter()
//!     .map(|row| row.iter().map(|&n| i64::from(n)).collect())
//!     .collect();
//!
//! let solved = nanpure_engine::solve(&rows)?;
//! assert_eq!(Some(solved.solution), generated.solution);
//! # Ok::<(), nanpure_engine::EngineError>(())
//! ```

use derive_more::{Display, Error, From};
use log::debug;
use nanpure_core::{Difficulty, Grid, GridError};
use nanpure_generator::{GeneratorError, PuzzleSeed};

pub mod wire;

pub use self::wire::{
    EvaluateResponse, ExplainResponse, GenerateResponse, RatingBody, SolveResponse,
};

/// Error returned by the engine operations.
#[derive(Debug, Display, Error, From, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The input grid has the wrong shape or out-of-range values.
    #[display("invalid grid: {_0}")]
    Invalid(GridError),
    /// The given clues conflict with each other.
    #[display("the given clues conflict")]
    Conflict,
    /// The puzzle has no solution.
    #[display("the puzzle has no solution")]
    Unsolvable,
    /// Puzzle generation failed.
    #[display("generation failed: {_0}")]
    Generation(GeneratorError),
}

/// Generates a puzzle of the requested difficulty.
///
/// The solution grid is included in the response only when
/// `include_solution` is set.
///
/// # Errors
///
/// Returns [`EngineError::Generation`] if no puzzle could be built.
pub fn generate(
    difficulty: Difficulty,
    include_solution: bool,
) -> Result<GenerateResponse, EngineError> {
    generate_with_seed(difficulty, PuzzleSeed::random(), include_solution)
}

/// Generates the puzzle determined by a seed and difficulty.
///
/// # Errors
///
/// Returns [`EngineError::Generation`] if no puzzle could be built.
pub fn generate_with_seed(
    difficulty: Difficulty,
    seed: PuzzleSeed,
    include_solution: bool,
) -> Result<GenerateResponse, EngineError> {
    let generated = nanpure_generator::generate_with_seed(difficulty, seed)?;
    debug!(
        "generate: difficulty={difficulty} clues={} seed={}",
        generated.puzzle.clue_count(),
        generated.seed,
    );
    Ok(GenerateResponse::new(&generated, difficulty, include_solution))
}

/// Solves a puzzle given as 9 rows of 9 integers in `0..=9`.
///
/// # Errors
///
/// - [`EngineError::Invalid`] for a malformed grid
/// - [`EngineError::Conflict`] when the clues conflict
/// - [`EngineError::Unsolvable`] when no completion exists
pub fn solve(rows: &[Vec<i64>]) -> Result<SolveResponse, EngineError> {
    let grid = Grid::try_from_values(rows)?;
    if grid.has_conflicts() {
        return Err(EngineError::Conflict);
    }
    let outcome = nanpure_solver::solve(&grid);
    let solution = outcome.solution.ok_or(EngineError::Unsolvable)?;
    debug!(
        "solve: steps={} backtracks={}",
        outcome.metrics.steps, outcome.metrics.backtracks,
    );
    Ok(SolveResponse {
        solution: solution.to_values(),
        metrics: outcome.metrics.into(),
    })
}

/// Solves a puzzle while recording every step taken.
///
/// Unsolvable puzzles are not an error here: the response carries a
/// `None` solution together with the steps taken before the dead end.
///
/// # Errors
///
/// - [`EngineError::Invalid`] for a malformed grid
/// - [`EngineError::Conflict`] when the clues conflict
pub fn explain(rows: &[Vec<i64>]) -> Result<ExplainResponse, EngineError> {
    let grid = Grid::try_from_values(rows)?;
    if grid.has_conflicts() {
        return Err(EngineError::Conflict);
    }
    let outcome = nanpure_solver::explain(&grid);
    debug!(
        "explain: solved={} steps_recorded={}",
        outcome.solution.is_some(),
        outcome.steps.as_ref().map_or(0, Vec::len),
    );
    Ok(ExplainResponse {
        solution: outcome.solution.map(|grid| grid.to_values()),
        steps: outcome
            .steps
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect(),
        metrics: outcome.metrics.into(),
    })
}

/// Rates a puzzle's difficulty.
///
/// Unsolvable puzzles rate as [`Difficulty::Expert`] with an infinite
/// score (serialized as `null`).
///
/// # Errors
///
/// Returns [`EngineError::Invalid`] for a malformed grid.
pub fn evaluate(rows: &[Vec<i64>]) -> Result<EvaluateResponse, EngineError> {
    let grid = Grid::try_from_values(rows)?;
    let evaluation = nanpure_rating::evaluate(&grid);
    debug!(
        "evaluate: level={} score={}",
        evaluation.rating.level, evaluation.rating.score,
    );
    Ok(EvaluateResponse {
        rating: wire::RatingBody {
            level: evaluation.rating.level,
            score: evaluation.rating.score,
        },
        metrics: evaluation.metrics.into(),
    })
}
