//! Puzzle generation for the nanpure engine.
//!
//! Generation works in two stages:
//!
//! 1. **Fill**: a depth-first search fills an empty grid, trying the
//!    candidates of each cell in random order, producing a complete
//!    solution.
//! 2. **Reduce**: clues are removed one at a time in random order. A
//!    removal is kept only if the puzzle still has exactly one solution;
//!    reduction stops once the difficulty's clue target is reached or no
//!    removable clue remains.
//!
//! All randomness comes from a PCG generator seeded by a [`PuzzleSeed`],
//! so a (seed, difficulty) pair always reproduces the same puzzle.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Difficulty;
//! use nanpure_generator::{PuzzleSeed, generate_with_seed};
//! use nanpure_solver::count_solutions;
//!
//! let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()
//!     .unwrap();
//! let generated = generate_with_seed(Difficulty::Easy, seed)?;
//!
//! assert!(generated.solution.is_solved());
//! assert_eq!(count_solutions(&generated.puzzle, 2), 1);
//! # Ok::<(), nanpure_generator::GeneratorError>(())
//! ```

use std::ops::RangeInclusive;

use derive_more::{Display, Error};
use log::debug;
use nanpure_core::{Difficulty, Digit, Grid, Position};
use nanpure_solver::count_solutions;
use rand::{Rng, RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

mod seed;

pub use self::seed::{ParseSeedError, PuzzleSeed};

/// A generated puzzle together with its solution and seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, guaranteed to have exactly one solution.
    pub puzzle: Grid,
    /// The solution the puzzle was carved from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Error returned when generation fails.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    /// The fill search could not complete a grid.
    #[display("failed to fill a complete solution grid")]
    FillFailed,
}

/// Generates a puzzle of the given difficulty from a fresh random seed.
///
/// # Errors
///
/// Returns [`GeneratorError::FillFailed`] if no complete solution grid
/// could be built.
pub fn generate(difficulty: Difficulty) -> Result<GeneratedPuzzle, GeneratorError> {
    generate_with_seed(difficulty, PuzzleSeed::random())
}

/// Generates the puzzle determined by a seed and difficulty.
///
/// The same (seed, difficulty) pair always yields the same puzzle.
///
/// # Errors
///
/// Returns [`GeneratorError::FillFailed`] if no complete solution grid
/// could be built.
pub fn generate_with_seed(
    difficulty: Difficulty,
    seed: PuzzleSeed,
) -> Result<GeneratedPuzzle, GeneratorError> {
    let mut rng = Pcg64::from_seed(*seed.as_bytes());
    let solution = fill_grid(&mut rng).ok_or(GeneratorError::FillFailed)?;
    let target = rng.random_range(clue_range(difficulty));
    let puzzle = reduce_clues(solution, target, &mut rng);
    debug!(
        "generated {difficulty} puzzle with {} clues (target {target}, seed {seed})",
        puzzle.clue_count(),
    );
    Ok(GeneratedPuzzle {
        puzzle,
        solution,
        seed,
    })
}

/// Returns the clue-count target range of a difficulty level.
#[must_use]
pub fn clue_range(difficulty: Difficulty) -> RangeInclusive<usize> {
    match difficulty {
        Difficulty::Easy => 36..=40,
        Difficulty::Medium => 32..=35,
        Difficulty::Hard => 28..=31,
        Difficulty::Expert => 24..=27,
    }
}

fn fill_grid<R>(rng: &mut R) -> Option<Grid>
where
    R: Rng,
{
    let mut grid = Grid::empty();
    fill_from(&mut grid, rng).then_some(grid)
}

fn fill_from<R>(grid: &mut Grid, rng: &mut R) -> bool
where
    R: Rng,
{
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    let mut digits: Vec<Digit> = grid.candidates(pos).iter().collect();
    digits.shuffle(rng);
    for digit in digits {
        grid.set(pos, Some(digit));
        if fill_from(grid, rng) {
            return true;
        }
        grid.set(pos, None);
    }
    false
}

/// Removes clues in random order while the puzzle keeps a unique
/// solution, stopping at `target` clues.
///
/// Uniqueness is preserved at every intermediate state, so the result is
/// always a valid puzzle even when the target cannot be reached.
fn reduce_clues<R>(mut grid: Grid, target: usize, rng: &mut R) -> Grid
where
    R: Rng,
{
    let mut positions: Vec<Position> = Position::all().collect();
    positions.shuffle(rng);
    for pos in positions {
        if grid.clue_count() <= target {
            break;
        }
        let Some(digit) = grid.get(pos) else {
            continue;
        };
        grid.set(pos, None);
        if count_solutions(&grid, 2) != 1 {
            grid.set(pos, Some(digit));
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn seed() -> PuzzleSeed {
        PuzzleSeed::from_str(SEED).unwrap()
    }

    #[test]
    fn test_generation_is_reproducible() {
        let first = generate_with_seed(Difficulty::Medium, seed()).unwrap();
        let second = generate_with_seed(Difficulty::Medium, seed()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_puzzle_is_unique_and_matches_solution() {
        let generated = generate_with_seed(Difficulty::Easy, seed()).unwrap();

        assert!(generated.solution.is_solved());
        assert_eq!(count_solutions(&generated.puzzle, 2), 1);

        // Every clue of the puzzle comes from the solution.
        for pos in Position::all() {
            if let Some(digit) = generated.puzzle.get(pos) {
                assert_eq!(generated.solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_difficulties_use_distinct_clue_targets() {
        for difficulty in Difficulty::ALL {
            let range = clue_range(difficulty);
            assert!(range.start() <= range.end());
        }
        assert!(clue_range(Difficulty::Expert).end() < clue_range(Difficulty::Hard).start());
        assert!(clue_range(Difficulty::Hard).end() < clue_range(Difficulty::Medium).start());
        assert!(clue_range(Difficulty::Medium).end() < clue_range(Difficulty::Easy).start());
    }

    #[test]
    fn test_fill_produces_a_solved_grid() {
        let mut rng = Pcg64::from_seed(*seed().as_bytes());
        let grid = fill_grid(&mut rng).unwrap();
        assert!(grid.is_solved());
    }

    #[test]
    fn test_reduction_never_breaks_uniqueness() {
        let generated = generate_with_seed(Difficulty::Hard, seed()).unwrap();
        // Hard targets 28 to 31 clues; reduction may stop early but never
        // below the target range.
        assert!(generated.puzzle.clue_count() >= *clue_range(Difficulty::Hard).start());
        assert_eq!(count_solutions(&generated.puzzle, 2), 1);
    }

    #[test]
    fn test_different_seeds_differ() {
        let other =
            PuzzleSeed::from_str("1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef")
                .unwrap();
        let first = generate_with_seed(Difficulty::Medium, seed()).unwrap();
        let second = generate_with_seed(Difficulty::Medium, other).unwrap();
        assert_ne!(first.puzzle, second.puzzle);
    }
}
