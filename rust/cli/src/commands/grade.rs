//! Math-challenge grading command.
//!
//! The answer key is never taken from the caller: the batch is regenerated
//! from the seed printed by `problems` and the submitted answers are scored
//! against it.

use crate::config;
use crate::error::CliError;
use crate::validation::validate_times;
use minutecasino_engine::engine::{self, GameInput};
use minutecasino_engine::math_challenge::{Difficulty, MathChallengeInput};
use minutecasino_engine::rng::Seed;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct GradeArgs {
    pub difficulty: Option<Difficulty>,
    pub seed: Seed,
    pub wager: Option<u32>,
    pub answers: Vec<i64>,
    pub times: Vec<f64>,
    pub json: bool,
}

pub fn handle_grade_command(
    args: GradeArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    validate_times(&args.times).map_err(CliError::InvalidInput)?;
    let difficulty = args.difficulty.unwrap_or(cfg.difficulty);
    let expected = difficulty.problem_count();
    if args.answers.len() != expected {
        crate::ui::display_warning(
            err,
            &format!(
                "{} answer(s) given for {} problem(s); missing answers count as wrong",
                args.answers.len(),
                expected
            ),
        )?;
    }

    let input = GameInput::MathChallenge(MathChallengeInput {
        wager: args.wager.unwrap_or(cfg.wager),
        difficulty,
        answers: args.answers,
        times: args.times,
    });
    let outcome = engine::play(&input, args.seed)?;
    super::play::emit_outcome(out, args.seed, input, outcome, args.json)
}
