//! Math-challenge problem generation command.
//!
//! Prints a batch together with the seed that produced it. Answers are not
//! printed: `grade` regenerates the key from the same seed.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_problem;
use minutecasino_engine::math_challenge::{problem_batch, Difficulty};
use minutecasino_engine::rng::Seed;
use std::io::Write;

pub fn handle_problems_command(
    difficulty: Option<Difficulty>,
    seed: Option<Seed>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let difficulty = difficulty.unwrap_or(cfg.difficulty);
    let seed = super::resolve_seed(seed, cfg.seed);
    let problems = problem_batch(difficulty, seed);

    if json {
        let listed: Vec<serde_json::Value> = problems
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "question": p.question,
                    "options": p.options,
                    "time_limit": p.time_limit,
                })
            })
            .collect();
        let doc = serde_json::json!({
            "seed": seed,
            "difficulty": difficulty,
            "problems": listed,
        });
        let s = serde_json::to_string_pretty(&doc).map_err(std::io::Error::other)?;
        writeln!(out, "{}", s)?;
    } else {
        writeln!(out, "Seed: {} ({})", seed, difficulty)?;
        for (i, p) in problems.iter().enumerate() {
            writeln!(out, "{}", format_problem(i, p))?;
        }
    }
    Ok(())
}
