//! Difficulty rating for the nanpure engine.
//!
//! A puzzle is rated by solving it and weighing the recorded effort:
//! empty cells, placements, backtracks, pair techniques, and the use of
//! backtracking all raise the score, while single techniques lower it
//! slightly (they indicate easy progress). Fixed thresholds then map the
//! score to a [`Difficulty`] level.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Difficulty, Grid};
//! use nanpure_rating::evaluate;
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
//! let evaluation = evaluate(&puzzle);
//! assert_eq!(evaluation.rating.level, Difficulty::Easy);
//! ```

use nanpure_core::{Difficulty, Grid};
use nanpure_solver::{Metrics, solve};

/// A difficulty level with its numeric score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// The difficulty level the score maps to.
    pub level: Difficulty,
    /// The score, rounded to the nearest integer. Infinite for puzzles
    /// with no solution.
    pub score: f64,
}

/// The full result of rating a puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The rating derived from the solve effort.
    pub rating: Rating,
    /// The metrics the rating was computed from.
    pub metrics: Metrics,
}

/// Rates a puzzle by solving it and scoring the effort.
///
/// Puzzles with no solution rate as [`Difficulty::Expert`] with an
/// infinite score and empty metrics.
#[must_use]
pub fn evaluate(grid: &Grid) -> Evaluation {
    let outcome = solve(grid);
    if outcome.solution.is_none() {
        return Evaluation {
            rating: Rating {
                level: Difficulty::Expert,
                score: f64::INFINITY,
            },
            metrics: Metrics::default(),
        };
    }

    let metrics = outcome.metrics;
    let score = score(grid, &metrics);
    Evaluation {
        rating: Rating {
            level: level_for_score(score),
            score: score.round(),
        },
        metrics,
    }
}

/// Maps a score to its difficulty level.
#[must_use]
pub fn level_for_score(score: f64) -> Difficulty {
    if score < 120.0 {
        Difficulty::Easy
    } else if score < 300.0 {
        Difficulty::Medium
    } else if score < 700.0 {
        Difficulty::Hard
    } else {
        Difficulty::Expert
    }
}

#[expect(clippy::cast_precision_loss, reason = "solve counters stay far below 2^52")]
fn score(grid: &Grid, metrics: &Metrics) -> f64 {
    let empty_cells = (Grid::CELLS - grid.clue_count()) as f64;
    let steps = metrics.steps as f64;
    let backtracks = metrics.backtracks as f64;
    let pairs = metrics.pairs() as f64;
    let singles = metrics.singles() as f64;
    let backtracking_penalty = if metrics.used_backtracking() { 20.0 } else { 0.0 };

    empty_cells * 1.3 + steps * 0.4 + backtracks * 2.2 + pairs * 4.0 + backtracking_penalty
        - singles * 0.2
}
