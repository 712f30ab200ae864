//! End-to-end tests of the engine operations over wire-format grids.

use std::str::FromStr as _;

use nanpure_core::Difficulty;
use nanpure_engine::EngineError;
use nanpure_generator::PuzzleSeed;

const CLASSIC_PUZZLE: [[i64; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

const CLASSIC_SOLUTION: [[u8; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

fn rows(values: &[[i64; 9]; 9]) -> Vec<Vec<i64>> {
    values.iter().map(|row| row.to_vec()).collect()
}

fn to_rows(values: &[Vec<u8>]) -> Vec<Vec<i64>> {
    values
        .iter()
        .map(|row| row.iter().map(|&n| i64::from(n)).collect())
        .collect()
}

fn classic_solution() -> Vec<Vec<u8>> {
    CLASSIC_SOLUTION.iter().map(|row| row.to_vec()).collect()
}

#[test]
fn test_solve_classic_puzzle() {
    let response = nanpure_engine::solve(&rows(&CLASSIC_PUZZLE)).unwrap();
    assert_eq!(response.solution, classic_solution());
    assert!(response.metrics.steps >= 51);
    assert!(!response.metrics.techniques_used.is_empty());
}

#[test]
fn test_solve_rejects_malformed_grids() {
    let short = vec![vec![0_i64; 9]; 8];
    assert_eq!(
        nanpure_engine::solve(&short),
        Err(EngineError::Invalid(nanpure_core::GridError::Shape))
    );

    let mut out_of_range = rows(&CLASSIC_PUZZLE);
    out_of_range[0][0] = 17;
    assert_eq!(
        nanpure_engine::solve(&out_of_range),
        Err(EngineError::Invalid(nanpure_core::GridError::ValueRange))
    );
}

#[test]
fn test_solve_rejects_conflicting_clues() {
    let mut conflicted = rows(&CLASSIC_PUZZLE);
    conflicted[0][2] = 5;
    assert_eq!(
        nanpure_engine::solve(&conflicted),
        Err(EngineError::Conflict)
    );
}

#[test]
fn test_solve_reports_unsolvable() {
    // Row 0 needs a 9 in its last cell, but the 9 below forbids it.
    let mut grid = vec![vec![0_i64; 9]; 9];
    grid[0][..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    grid[1][8] = 9;
    assert_eq!(nanpure_engine::solve(&grid), Err(EngineError::Unsolvable));
}

#[test]
fn test_explain_steps_replay_to_solution() {
    let response = nanpure_engine::explain(&rows(&CLASSIC_PUZZLE)).unwrap();
    let solution = response.solution.expect("classic puzzle is solvable");
    assert_eq!(solution, classic_solution());

    let mut replay: Vec<Vec<u8>> = CLASSIC_PUZZLE
        .iter()
        .map(|row| {
            row.iter()
                .map(|&n| u8::try_from(n).unwrap())
                .collect()
        })
        .collect();
    for step in &response.steps {
        for cell in &step.placements {
            let current = &mut replay[cell.r as usize][cell.c as usize];
            assert_eq!(*current, 0, "{} overwrites a cell", step.technique);
            *current = cell.n;
        }
    }
    assert_eq!(replay, solution);
}

#[test]
fn test_explain_rejects_conflicting_clues() {
    let mut grid = vec![vec![0_i64; 9]; 9];
    grid[0][0] = 1;
    grid[0][1] = 1;
    assert_eq!(nanpure_engine::explain(&grid), Err(EngineError::Conflict));
}

#[test]
fn test_explain_of_unsolvable_puzzle_is_ok() {
    // Conflict-free, but (0, 8) has no digit left.
    let mut grid = vec![vec![0_i64; 9]; 9];
    grid[0][..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    grid[1][8] = 9;
    let response = nanpure_engine::explain(&grid).unwrap();
    assert!(response.solution.is_none());
}

#[test]
fn test_evaluate_classic_puzzle() {
    let response = nanpure_engine::evaluate(&rows(&CLASSIC_PUZZLE)).unwrap();
    assert_eq!(response.rating.level, Difficulty::Easy);
    assert!(response.rating.score.is_finite());
    assert!(response.rating.score > 0.0);
}

#[test]
fn test_evaluate_unsolvable_puzzle() {
    let mut grid = vec![vec![0_i64; 9]; 9];
    grid[0][0] = 1;
    grid[0][1] = 1;
    let response = nanpure_engine::evaluate(&grid).unwrap();
    assert_eq!(response.rating.level, Difficulty::Expert);
    assert!(response.rating.score.is_infinite());

    // Infinite scores have no JSON number representation and become null.
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["rating"]["score"], serde_json::Value::Null);
    assert_eq!(json["rating"]["level"], "expert");
}

#[test]
fn test_generate_round_trips_through_solve() {
    let seed = PuzzleSeed::from_str(
        "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    )
    .unwrap();
    let generated =
        nanpure_engine::generate_with_seed(Difficulty::Medium, seed, true).unwrap();
    assert_eq!(generated.difficulty, Difficulty::Medium);
    assert_eq!(generated.seed, seed.to_string());

    let solved = nanpure_engine::solve(&to_rows(&generated.puzzle)).unwrap();
    assert_eq!(Some(solved.solution), generated.solution);
}

#[test]
fn test_generate_reproducible_and_solution_optional() {
    let seed = PuzzleSeed::from_str(
        "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    )
    .unwrap();
    let first = nanpure_engine::generate_with_seed(Difficulty::Easy, seed, false).unwrap();
    let second = nanpure_engine::generate_with_seed(Difficulty::Easy, seed, false).unwrap();
    assert_eq!(first.puzzle, second.puzzle);
    assert!(first.solution.is_none());

    // An omitted solution does not appear in the JSON at all.
    let json = serde_json::to_value(&first).unwrap();
    assert!(json.get("solution").is_none());
}

#[test]
fn test_metrics_json_uses_camel_case() {
    let response = nanpure_engine::solve(&rows(&CLASSIC_PUZZLE)).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["metrics"]["techniquesUsed"].is_array());
    assert!(json["metrics"]["steps"].is_u64());
}
