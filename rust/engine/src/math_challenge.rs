//! Timed arithmetic challenge.
//!
//! A problem batch is a pure function of `(difficulty, seed)`. Grading never
//! trusts problems handed back by the caller: it regenerates the batch from
//! the seed and scores the submitted answers against that key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::errors::GameError;
use crate::game::GameKind;
use crate::outcome::{Outcome, ResultClass};
use crate::rng::{MixedLcg, RandomStream, Seed};

/// Number of answer options shown per problem.
pub const OPTION_COUNT: usize = 4;

/// Fraction of the wager lost on a failed challenge.
pub const LOSS_FRACTION: f64 = 0.5;

const MIN_BONUS: f64 = 0.1;
const MIN_SPEED_BONUS: f64 = 0.5;
const MAX_SPEED_BONUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn problem_count(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 4,
            Difficulty::Hard => 3,
        }
    }

    /// Seconds allowed per problem.
    pub fn time_limit(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 8,
            Difficulty::Hard => 5,
        }
    }

    /// Accuracy needed to win.
    pub fn required_accuracy(self) -> f64 {
        match self {
            Difficulty::Easy => 0.80,
            Difficulty::Medium => 0.75,
            Difficulty::Hard => 0.67,
        }
    }

    /// Average seconds per problem that earns a neutral speed bonus.
    pub fn target_time(self) -> f64 {
        match self {
            Difficulty::Easy => 15.0,
            Difficulty::Medium => 25.0,
            Difficulty::Hard => 40.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidInput(format!(
                "unknown difficulty: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathProblem {
    pub id: String,
    pub question: String,
    pub answer: i64,
    pub options: Vec<i64>,
    pub difficulty: Difficulty,
    pub time_limit: u32,
}

/// A graded attempt: the submitted answers and seconds spent per problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathChallengeInput {
    pub wager: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub answers: Vec<i64>,
    #[serde(default)]
    pub times: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathChallengeDisplay {
    pub problems: Vec<MathProblem>,
    pub user_answers: Vec<i64>,
    pub correct_answers: Vec<i64>,
    pub time_spent: Vec<f64>,
    pub total_correct: usize,
    pub total_problems: usize,
    pub accuracy: f64,
    pub bonus_multiplier: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MathChallenge;

/// Generate `count` problems from one stream seeded with `seed`.
pub fn generate_problems(difficulty: Difficulty, count: usize, seed: Seed) -> Vec<MathProblem> {
    let mut rng = MixedLcg::new(seed);
    (0..count)
        .map(|i| generate_problem(difficulty, &mut rng, i))
        .collect()
}

/// The canonical batch for a difficulty tier.
pub fn problem_batch(difficulty: Difficulty, seed: Seed) -> Vec<MathProblem> {
    generate_problems(difficulty, difficulty.problem_count(), seed)
}

fn generate_problem(difficulty: Difficulty, rng: &mut impl RandomStream, index: usize) -> MathProblem {
    let (question, answer) = match difficulty {
        Difficulty::Easy => easy_problem(rng),
        Difficulty::Medium => medium_problem(rng),
        Difficulty::Hard => hard_problem(rng),
    };
    let options = answer_options(answer, rng);
    MathProblem {
        id: index.to_string(),
        question,
        answer,
        options,
        difficulty,
        time_limit: difficulty.time_limit(),
    }
}

/// Three-term addition or subtraction with a positive result.
fn easy_problem(rng: &mut impl RandomStream) -> (String, i64) {
    if rng.next_int(0, 1) == 0 {
        let a = rng.next_int(10, 50);
        let b = rng.next_int(10, 50);
        let c = rng.next_int(10, 50);
        (format!("{a} + {b} + {c} = ?"), a + b + c)
    } else {
        let c = rng.next_int(5, 20);
        let b = rng.next_int(10, 30);
        let a = rng.next_int(b + c + 10, b + c + 80);
        (format!("{a} - {b} - {c} = ?"), a - b - c)
    }
}

/// Two-digit multiplication or exact division.
fn medium_problem(rng: &mut impl RandomStream) -> (String, i64) {
    if rng.next_int(0, 1) == 0 {
        let a = rng.next_int(12, 25);
        let b = rng.next_int(11, 20);
        (format!("{a} × {b} = ?"), a * b)
    } else {
        let b = rng.next_int(6, 15);
        let quotient = rng.next_int(8, 25);
        (format!("{} ÷ {b} = ?", b * quotient), quotient)
    }
}

/// Small integer powers.
fn hard_problem(rng: &mut impl RandomStream) -> (String, i64) {
    let base = rng.next_int(2, 9);
    let exponent = rng.next_int(2, 4);
    (format!("{base}^{exponent} = ?"), base.pow(exponent as u32))
}

/// The correct answer plus three distinct nearby distractors, shuffled.
///
/// Distractors are offsets within roughly 30% of the answer. The offset
/// radius never drops below 2, so at least four non-zero offsets exist and
/// three distinct distractors can always be found.
fn answer_options(answer: i64, rng: &mut impl RandomStream) -> Vec<i64> {
    const MAX_ATTEMPTS: usize = 64;

    let variance = (answer.abs() as f64 * 0.3).max(1.0);
    let radius = (variance.round() as i64).max(2);

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(answer);
    while options.len() < OPTION_COUNT {
        let mut candidate = None;
        for _ in 0..MAX_ATTEMPTS {
            let wrong = answer + rng.next_int(-radius, radius);
            if !options.contains(&wrong) {
                candidate = Some(wrong);
                break;
            }
        }
        // deterministic walk outward if the stream keeps repeating itself
        let wrong = candidate.unwrap_or_else(|| {
            (1..)
                .flat_map(|k| [answer + k, answer - k])
                .find(|v| !options.contains(v))
                .unwrap_or(answer + 1)
        });
        options.push(wrong);
    }

    for i in (1..options.len()).rev() {
        let j = rng.next_int(0, i as i64) as usize;
        options.swap(i, j);
    }
    options
}

/// `clamp(target / average, 0.5, 2.0)`. An empty time list or a non-finite
/// average counts as exactly on target; a zero average earns the cap.
pub fn speed_bonus(difficulty: Difficulty, times: &[f64]) -> f64 {
    let target = difficulty.target_time();
    if times.is_empty() {
        return 1.0;
    }
    let average = times.iter().sum::<f64>() / times.len() as f64;
    if !average.is_finite() {
        return 1.0;
    }
    if average <= 0.0 {
        return MAX_SPEED_BONUS;
    }
    (target / average).clamp(MIN_SPEED_BONUS, MAX_SPEED_BONUS)
}

/// Score an attempt against a batch. Returns `(result, delta, correct,
/// accuracy, bonus_multiplier)`.
pub fn score(
    wager: u32,
    difficulty: Difficulty,
    problems: &[MathProblem],
    answers: &[i64],
    times: &[f64],
) -> (ResultClass, i64, usize, f64, f64) {
    let correct = problems
        .iter()
        .zip(answers)
        .filter(|(p, a)| p.answer == **a)
        .count();
    let accuracy = if problems.is_empty() {
        0.0
    } else {
        correct as f64 / problems.len() as f64
    };
    let bonus = (accuracy * speed_bonus(difficulty, times)).max(MIN_BONUS);

    let required = difficulty.required_accuracy();
    let wager_f = f64::from(wager);
    let (result, delta) = if accuracy >= required {
        (ResultClass::Win, (wager_f * bonus).round() as i64)
    } else if accuracy >= required * 0.5 {
        (ResultClass::Push, 0)
    } else {
        (ResultClass::Loss, -((wager_f * LOSS_FRACTION).round() as i64))
    };
    (result, delta, correct, accuracy, bonus)
}

impl GameEngine for MathChallenge {
    const KIND: GameKind = GameKind::MathChallenge;
    type Input = MathChallengeInput;
    type Display = MathChallengeDisplay;

    fn check(&self, input: &MathChallengeInput) -> Result<(), GameError> {
        Self::KIND.check_wager(input.wager)?;
        if input.times.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(GameError::InvalidInput(
                "time spent must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }

    fn simulate(
        &self,
        input: &MathChallengeInput,
        seed: Seed,
    ) -> Result<Outcome<MathChallengeDisplay>, GameError> {
        let problems = problem_batch(input.difficulty, seed);
        let correct_answers: Vec<i64> = problems.iter().map(|p| p.answer).collect();
        let (result, delta, total_correct, accuracy, bonus_multiplier) = score(
            input.wager,
            input.difficulty,
            &problems,
            &input.answers,
            &input.times,
        );

        Ok(Outcome::new(
            result,
            delta,
            MathChallengeDisplay {
                total_problems: problems.len(),
                problems,
                user_answers: input.answers.clone(),
                correct_answers,
                time_spent: input.times.clone(),
                total_correct,
                accuracy,
                bonus_multiplier,
            },
        ))
    }
}
