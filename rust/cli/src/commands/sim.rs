//! Simulation command: many automated rounds of one game.
//!
//! Every round gets its own engine seed, drawn from a ChaCha20 stream seeded
//! with the base seed, so a whole run is reproducible from one number. The
//! same stream drives the automated player's choices (math answers, jewel
//! clicks). Each delta is applied to a clamped minute balance and the run
//! stops early once the balance cannot cover the next stake.
//!
//! # Examples
//!
//! ```no_run
//! use minutecasino_cli::commands::{handle_sim_command, SimArgs};
//! use minutecasino_engine::game::GameKind;
//! use std::io;
//!
//! let args = SimArgs {
//!     game: GameKind::Blackjack,
//!     rounds: 100,
//!     seed: Some(42),
//!     output: Some("data/blackjack.jsonl".to_string()),
//!     ..SimArgs::default()
//! };
//! handle_sim_command(args, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::config;
use crate::error::CliError;
use crate::io_utils::open_jsonl_writer;
use crate::ui;
use crate::validation::parse_bet_specs;
use minutecasino_engine::blackjack::BlackjackInput;
use minutecasino_engine::engine::{self, GameInput};
use minutecasino_engine::game::GameKind;
use minutecasino_engine::jewel_mining::{JewelMiningInput, GRID_SIZE};
use minutecasino_engine::limits::{ClampedLimit, CreditSink, DailyTally};
use minutecasino_engine::logger::{RoundLogger, RoundRecord};
use minutecasino_engine::math_challenge::{problem_batch, Difficulty, MathChallengeInput};
use minutecasino_engine::pai_gow::PaiGowInput;
use minutecasino_engine::plinko::PlinkoInput;
use minutecasino_engine::rng::Seed;
use minutecasino_engine::roulette::{BetKind, Color, RouletteBet, RouletteInput};
use minutecasino_engine::slots::SlotsInput;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::path::Path;

/// Chance that the automated math player answers a problem correctly.
const SIM_MATH_ACCURACY: f64 = 0.8;
/// Most cells the automated miner reveals in one round.
const SIM_MAX_CLICKS: usize = 5;

#[derive(Debug, Clone)]
pub struct SimArgs {
    pub game: GameKind,
    pub rounds: u64,
    pub wager: Option<u32>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub starting_limit: Option<i64>,
    pub bets: Vec<String>,
    pub difficulty: Option<Difficulty>,
}

impl Default for SimArgs {
    fn default() -> Self {
        Self {
            game: GameKind::Slots,
            rounds: 1,
            wager: None,
            seed: None,
            output: None,
            starting_limit: None,
            bets: Vec::new(),
            difficulty: None,
        }
    }
}

/// Handle the sim command.
///
/// Prints a JSON summary (rounds played, base seed, tally, final balance)
/// to `out`; progress notes go to `err`.
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let wager = args.wager.unwrap_or(cfg.wager);
    let difficulty = args.difficulty.unwrap_or(cfg.difficulty);
    let bets = if args.game == GameKind::Roulette {
        if args.bets.is_empty() {
            vec![RouletteBet::new(BetKind::Color(Color::Red), wager)]
        } else {
            parse_bet_specs(&args.bets).map_err(CliError::InvalidInput)?
        }
    } else {
        if !args.bets.is_empty() {
            ui::warn_parameter_unused(err, "bet", args.game.id())?;
        }
        Vec::new()
    };

    let requested_limit = args.starting_limit.unwrap_or(cfg.starting_limit);
    let mut limit = ClampedLimit::new(requested_limit);
    if limit.minutes() != requested_limit {
        ui::display_warning(
            err,
            &format!(
                "starting limit {} clamped to {}",
                requested_limit,
                limit.minutes()
            ),
        )?;
    }

    // configured seeds are signed for the engines; ChaCha takes the magnitude
    let base_seed = args
        .seed
        .or(cfg.seed.map(i64::unsigned_abs))
        .unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(base_seed);

    // reject a bad template before any round is played
    let mut scratch = ChaCha20Rng::seed_from_u64(0);
    let template = auto_input(args.game, wager, &bets, difficulty, 1, &mut scratch);
    engine::check(&template)?;

    let mut logger = match args.output.as_deref() {
        Some(path) => {
            let writer = open_jsonl_writer(Path::new(path)).map_err(CliError::InvalidInput)?;
            Some(RoundLogger::from_writer(writer))
        }
        None => None,
    };

    let mut tally = DailyTally::default();
    let mut stopped_early = false;
    for _ in 0..args.rounds {
        let seed: Seed = rng.random_range(1..2_147_483_647);
        let input = auto_input(args.game, wager, &bets, difficulty, seed, &mut rng);
        if (limit.minutes() as u64) < input.wager() {
            stopped_early = true;
            break;
        }
        let outcome = engine::play(&input, seed)?;
        tally.record(outcome.result, outcome.delta);
        limit.apply_delta(outcome.delta);
        if let Some(lg) = logger.as_mut() {
            let rec = RoundRecord::new(lg.next_id(), seed, input, outcome);
            lg.write(&rec)?;
        }
    }

    if stopped_early {
        ui::display_warning(
            err,
            &format!(
                "stopped after {} round(s): {} min left is below the stake",
                tally.games_played,
                limit.minutes()
            ),
        )?;
    }
    if let Some(path) = args.output.as_deref() {
        writeln!(err, "Wrote {} round(s) to {}", tally.games_played, path)?;
    }

    let summary = serde_json::json!({
        "game": args.game,
        "base_seed": base_seed,
        "rounds": tally.games_played,
        "tally": tally,
        "win_rate": tally.win_rate(),
        "final_limit": limit.minutes(),
    });
    let s = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", s)?;
    Ok(())
}

/// Input an automated player would submit for one round.
fn auto_input(
    game: GameKind,
    wager: u32,
    bets: &[RouletteBet],
    difficulty: Difficulty,
    seed: Seed,
    rng: &mut ChaCha20Rng,
) -> GameInput {
    match game {
        GameKind::Slots => GameInput::Slots(SlotsInput { wager }),
        GameKind::Blackjack => GameInput::Blackjack(BlackjackInput { wager }),
        GameKind::Roulette => GameInput::Roulette(RouletteInput {
            bets: bets.to_vec(),
        }),
        GameKind::Plinko => GameInput::Plinko(PlinkoInput { wager }),
        GameKind::PaiGow => GameInput::PaiGow(PaiGowInput { wager }),
        GameKind::MathChallenge => {
            let problems = problem_batch(difficulty, seed);
            let answers = problems
                .iter()
                .map(|p| {
                    if rng.random_bool(SIM_MATH_ACCURACY) {
                        p.answer
                    } else {
                        p.options[rng.random_range(0..p.options.len())]
                    }
                })
                .collect();
            let times = problems
                .iter()
                .map(|p| rng.random_range(1.0..=f64::from(p.time_limit)))
                .collect();
            GameInput::MathChallenge(MathChallengeInput {
                wager,
                difficulty,
                answers,
                times,
            })
        }
        GameKind::JewelMining => {
            let count = rng.random_range(1..=SIM_MAX_CLICKS);
            let clicks = rand::seq::index::sample(rng, GRID_SIZE, count).into_vec();
            GameInput::JewelMining(JewelMiningInput { wager, clicks })
        }
    }
}
