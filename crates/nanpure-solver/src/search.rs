//! Depth-first backtracking search.

use nanpure_core::Grid;

use crate::Metrics;

/// Fills every empty cell of `grid` by depth-first search, trying the
/// candidates of the first empty cell (row-major) in ascending order.
///
/// Every tried digit counts one step; every undone placement counts one
/// backtrack. Returns `false` and leaves the grid as it was when no
/// completion exists.
pub(crate) fn complete(grid: &mut Grid, metrics: &mut Metrics) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for digit in grid.candidates(pos) {
        metrics.steps += 1;
        grid.set(pos, Some(digit));
        if complete(grid, metrics) {
            return true;
        }
        grid.set(pos, None);
        metrics.backtracks += 1;
    }
    false
}

/// Counts the completions of `grid`, stopping as soon as `limit` are
/// found.
///
/// A grid whose clues conflict has no completions. The generator calls
/// this with a limit of 2 to test uniqueness.
///
/// # Examples
///
/// ```
/// use nanpure_core::Grid;
/// use nanpure_solver::count_solutions;
///
/// let solved: Grid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(count_solutions(&solved, 2), 1);
/// ```
#[must_use]
pub fn count_solutions(grid: &Grid, limit: usize) -> usize {
    if grid.has_conflicts() {
        return 0;
    }
    let mut copy = *grid;
    let mut count = 0;
    count_completions(&mut copy, limit, &mut count);
    count
}

fn count_completions(grid: &mut Grid, limit: usize, count: &mut usize) {
    if *count >= limit {
        return;
    }
    let Some(pos) = grid.first_empty() else {
        *count += 1;
        return;
    };
    for digit in grid.candidates(pos) {
        grid.set(pos, Some(digit));
        count_completions(grid, limit, count);
        grid.set(pos, None);
        if *count >= limit {
            return;
        }
    }
}
