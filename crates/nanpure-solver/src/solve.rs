//! Solver entry points.

use nanpure_core::Grid;

use crate::{
    EngineContext, Metrics, StepRecorder, engine::run_to_quiescence, recorder::CellDigit,
    recorder::Step, search, technique::TechniqueKind,
};

/// The result of one solver run.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The solved grid, or `None` when the puzzle has no solution.
    pub solution: Option<Grid>,
    /// The effort spent, whether or not a solution was found.
    pub metrics: Metrics,
    /// The recorded steps. `Some` only for explained solves.
    pub steps: Option<Vec<Step>>,
}

/// Solves a puzzle, reporting the solution and the effort metrics.
///
/// The logical techniques run first; if they stall, backtracking search
/// finishes the grid. Puzzles whose clues conflict are reported as
/// having no solution.
///
/// # Examples
///
/// ```
/// use nanpure_core::Grid;
/// use nanpure_solver::solve;
///
/// let puzzle: Grid = "
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
///
/// let outcome = solve(&puzzle);
/// assert!(outcome.solution.is_some_and(|grid| grid.is_solved()));
/// assert!(outcome.steps.is_none());
/// ```
#[must_use]
pub fn solve(grid: &Grid) -> SolveOutcome {
    run(grid, StepRecorder::disabled())
}

/// Solves a puzzle while recording every step taken.
///
/// Identical to [`solve`] except that the outcome carries the step list:
/// replaying the placements of the steps over the puzzle reproduces the
/// solution.
#[must_use]
pub fn explain(grid: &Grid) -> SolveOutcome {
    run(grid, StepRecorder::enabled())
}

fn run(grid: &Grid, recorder: StepRecorder) -> SolveOutcome {
    let explaining = recorder.is_enabled();
    if grid.has_conflicts() {
        return SolveOutcome {
            solution: None,
            metrics: Metrics::default(),
            steps: explaining.then(Vec::new),
        };
    }

    let mut cx = EngineContext::new(*grid, recorder);
    run_to_quiescence(&mut cx);
    let (mut current, mut metrics, mut recorder) = cx.into_parts();

    let solution = if current.is_complete() {
        Some(current)
    } else {
        let stalled = current;
        metrics.techniques_used.push(TechniqueKind::Backtracking);
        if search::complete(&mut current, &mut metrics) {
            let filled = filled_by_search(&stalled, &current);
            recorder.record(TechniqueKind::Backtracking, &filled, &[]);
            Some(current)
        } else {
            None
        }
    };

    SolveOutcome {
        solution,
        metrics,
        steps: explaining.then(|| recorder.into_steps()),
    }
}

fn filled_by_search(stalled: &Grid, solved: &Grid) -> Vec<CellDigit> {
    nanpure_core::Position::all()
        .filter(|&pos| stalled.get(pos).is_none())
        .filter_map(|pos| solved.get(pos).map(|digit| CellDigit::new(pos, digit)))
        .collect()
}
