//! Serializable response bodies.
//!
//! These types define the JSON shape of the engine's results: grids as 9x9
//! arrays of 0-9, cells as `{r, c, n}` objects, and technique names as
//! their display labels.

use nanpure_core::Difficulty;
use nanpure_generator::GeneratedPuzzle;
use nanpure_solver::{CellDigit, Metrics, Step};
use serde::Serialize;

/// One cell/digit pair: row, column, and digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WireCell {
    /// Row index, 0-8.
    pub r: u8,
    /// Column index, 0-8.
    pub c: u8,
    /// Digit value, 1-9.
    pub n: u8,
}

impl From<CellDigit> for WireCell {
    fn from(cell: CellDigit) -> Self {
        Self {
            r: cell.pos.row(),
            c: cell.pos.col(),
            n: cell.digit.value(),
        }
    }
}

/// One recorded solver step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepBody {
    /// The display label of the technique, such as `Hidden Single (row)`.
    pub technique: String,
    /// Digits placed by this step.
    pub placements: Vec<WireCell>,
    /// Candidates removed by this step.
    pub eliminations: Vec<WireCell>,
}

impl From<Step> for StepBody {
    fn from(step: Step) -> Self {
        Self {
            technique: step.technique.to_string(),
            placements: step.placements.into_iter().map(Into::into).collect(),
            eliminations: step.eliminations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Solve-effort counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsBody {
    /// Total placements, including digits tried by the search.
    pub steps: u64,
    /// Number of undone search placements.
    pub backtracks: u64,
    /// Display labels of every technique application, in order.
    #[serde(rename = "techniquesUsed")]
    pub techniques_used: Vec<String>,
}

impl From<Metrics> for MetricsBody {
    fn from(metrics: Metrics) -> Self {
        Self {
            steps: metrics.steps,
            backtracks: metrics.backtracks,
            techniques_used: metrics
                .techniques_used
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Response of [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResponse {
    /// The puzzle grid, 0 for empty cells.
    pub puzzle: Vec<Vec<u8>>,
    /// The solution grid, present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<Vec<u8>>>,
    /// The requested difficulty level.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle, as 64 hex characters.
    pub seed: String,
}

impl GenerateResponse {
    pub(crate) fn new(
        generated: &GeneratedPuzzle,
        difficulty: Difficulty,
        include_solution: bool,
    ) -> Self {
        Self {
            puzzle: generated.puzzle.to_values(),
            solution: include_solution.then(|| generated.solution.to_values()),
            difficulty,
            seed: generated.seed.to_string(),
        }
    }
}

/// Response of [`solve`](crate::solve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResponse {
    /// The completed grid.
    pub solution: Vec<Vec<u8>>,
    /// The effort spent solving.
    pub metrics: MetricsBody,
}

/// Response of [`explain`](crate::explain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainResponse {
    /// The completed grid, or `None` when the puzzle has no solution.
    pub solution: Option<Vec<Vec<u8>>>,
    /// Every step taken, in order.
    pub steps: Vec<StepBody>,
    /// The effort spent solving.
    pub metrics: MetricsBody,
}

/// Rating of a puzzle: a difficulty level and the score it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingBody {
    /// The difficulty level the score maps to.
    pub level: Difficulty,
    /// The rounded difficulty score. Infinite scores serialize as `null`.
    pub score: f64,
}

/// Response of [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluateResponse {
    /// The puzzle's rating.
    pub rating: RatingBody,
    /// The effort metrics the score was computed from.
    pub metrics: MetricsBody,
}
