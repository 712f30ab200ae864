//! Example generating a puzzle and printing the engine responses as JSON.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate -- --difficulty hard --solution
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate -- --seed \
//!     1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Enable debug logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate
//! ```

use std::process;

use clap::Parser;
use nanpure_core::Difficulty;
use nanpure_generator::PuzzleSeed;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level to generate (easy, medium, hard, expert).
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Difficulty,

    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Include the solution grid in the output.
    #[arg(long)]
    solution: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generated = match args.seed {
        Some(seed) => nanpure_engine::generate_with_seed(args.difficulty, seed, args.solution),
        None => nanpure_engine::generate(args.difficulty, args.solution),
    };
    let generated = match generated {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    let rows: Vec<Vec<i64>> = generated
        .puzzle
        .iter()
        .map(|row| row.iter().map(|&n| i64::from(n)).collect())
        .collect();
    let evaluation = nanpure_engine::evaluate(&rows).expect("generated grids are well-formed");

    println!(
        "{}",
        serde_json::to_string_pretty(&generated).expect("responses serialize")
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&evaluation).expect("responses serialize")
    );
}
