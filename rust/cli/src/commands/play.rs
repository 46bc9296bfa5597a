//! Single-round play command.
//!
//! Builds a [`GameInput`] from command-line flags, plays it with a seed, and
//! prints either a text summary or a JSONL-ready [`RoundRecord`]. Records
//! printed with `--json` can be appended to a file and checked with `verify`.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_outcome;
use crate::ui;
use crate::validation::{parse_bet_specs, validate_times};
use chrono::{SecondsFormat, Utc};
use minutecasino_engine::blackjack::BlackjackInput;
use minutecasino_engine::engine::{self, GameDisplay, GameInput};
use minutecasino_engine::game::GameKind;
use minutecasino_engine::jewel_mining::JewelMiningInput;
use minutecasino_engine::logger::{format_round_id, RoundRecord};
use minutecasino_engine::math_challenge::{Difficulty, MathChallengeInput};
use minutecasino_engine::outcome::Outcome;
use minutecasino_engine::pai_gow::PaiGowInput;
use minutecasino_engine::plinko::PlinkoInput;
use minutecasino_engine::rng::Seed;
use minutecasino_engine::roulette::RouletteInput;
use minutecasino_engine::slots::SlotsInput;
use std::io::Write;

/// Flags accepted by `play`.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub game: Option<GameKind>,
    pub wager: Option<u32>,
    pub seed: Option<Seed>,
    pub bets: Vec<String>,
    pub clicks: Vec<usize>,
    pub difficulty: Option<Difficulty>,
    pub answers: Vec<i64>,
    pub times: Vec<f64>,
    pub json: bool,
}

/// Handle the play command: one round of one game.
///
/// # Errors
///
/// - `CliError::Config` when configuration cannot be loaded
/// - `CliError::InvalidInput` for malformed bet specs or times
/// - `CliError::Engine` when the engine rejects the input
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let game = args
        .game
        .ok_or_else(|| CliError::InvalidInput("--game is required".to_string()))?;
    let input = build_input(game, &args, cfg.wager, cfg.difficulty, err)?;
    let seed = super::resolve_seed(args.seed, cfg.seed);
    let outcome = engine::play(&input, seed)?;
    emit_outcome(out, seed, input, outcome, args.json)
}

/// Print a settled round as text or as a single-line JSON record.
pub(crate) fn emit_outcome(
    out: &mut dyn Write,
    seed: Seed,
    input: GameInput,
    outcome: Outcome<GameDisplay>,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let today = Utc::now().format("%Y%m%d").to_string();
        let mut rec = RoundRecord::new(format_round_id(&today, 1), seed, input, outcome);
        rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", format_outcome(seed, &outcome))?;
    }
    Ok(())
}

/// Turn flags into an engine input, warning about flags the game ignores.
pub(crate) fn build_input(
    game: GameKind,
    args: &PlayArgs,
    default_wager: u32,
    default_difficulty: Difficulty,
    err: &mut dyn Write,
) -> Result<GameInput, CliError> {
    let id = game.id();
    if game != GameKind::Roulette && !args.bets.is_empty() {
        ui::warn_parameter_unused(err, "bet", id)?;
    }
    if game == GameKind::Roulette && args.wager.is_some() {
        ui::warn_parameter_unused(err, "wager", id)?;
    }
    if game != GameKind::JewelMining && !args.clicks.is_empty() {
        ui::warn_parameter_unused(err, "click", id)?;
    }
    if game != GameKind::MathChallenge {
        if args.difficulty.is_some() {
            ui::warn_parameter_unused(err, "difficulty", id)?;
        }
        if !args.answers.is_empty() {
            ui::warn_parameter_unused(err, "answer", id)?;
        }
        if !args.times.is_empty() {
            ui::warn_parameter_unused(err, "time", id)?;
        }
    }

    let wager = args.wager.unwrap_or(default_wager);
    let input = match game {
        GameKind::Slots => GameInput::Slots(SlotsInput { wager }),
        GameKind::Blackjack => GameInput::Blackjack(BlackjackInput { wager }),
        GameKind::Roulette => GameInput::Roulette(RouletteInput {
            bets: parse_bet_specs(&args.bets).map_err(CliError::InvalidInput)?,
        }),
        GameKind::Plinko => GameInput::Plinko(PlinkoInput { wager }),
        GameKind::PaiGow => GameInput::PaiGow(PaiGowInput { wager }),
        GameKind::MathChallenge => {
            validate_times(&args.times).map_err(CliError::InvalidInput)?;
            GameInput::MathChallenge(MathChallengeInput {
                wager,
                difficulty: args.difficulty.unwrap_or(default_difficulty),
                answers: args.answers.clone(),
                times: args.times.clone(),
            })
        }
        GameKind::JewelMining => GameInput::JewelMining(JewelMiningInput {
            wager,
            clicks: args.clicks.clone(),
        }),
    };
    Ok(input)
}
