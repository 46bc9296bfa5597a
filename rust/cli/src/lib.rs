//! # MinuteCasino CLI Library
//!
//! Command-line front end for the deterministic screen-time casino engines.
//! Every round is a pure function of its input and a seed, so any round the
//! CLI prints or records can be replayed exactly.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["minutecasino", "play", "--game", "slots", "--seed", "42"];
//! let code = minutecasino_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one round of any game
//! - `problems`: Print a math-challenge batch for a seed
//! - `grade`: Grade math answers against a seed's batch
//! - `sim`: Run automated rounds and record them as JSONL
//! - `stats`: Aggregate per-game tallies from round logs
//! - `verify`: Replay round logs and check they reproduce
//! - `rng`: Print raw draws from either random stream
//! - `cfg`: Display resolved configuration and where each value came from

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, MinuteCasinoCli};
use commands::{
    GradeArgs, PlayArgs, SimArgs, handle_cfg_command, handle_grade_command,
    handle_play_command, handle_problems_command, handle_rng_command, handle_sim_command,
    handle_stats_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &[
    "play", "problems", "grade", "sim", "stats", "verify", "rng", "cfg",
];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["minutecasino", "rng", "--seed", "1", "--count", "1"];
/// let mut out = Vec::new();
/// let code = minutecasino_cli::run(args, &mut out, &mut io::sink());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("seed 1"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match MinuteCasinoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };
    logging::init_logging();

    let result = match cli.cmd {
        Commands::Play {
            game,
            wager,
            seed,
            bets,
            clicks,
            difficulty,
            answers,
            times,
            json,
        } => handle_play_command(
            PlayArgs {
                game: Some(game),
                wager,
                seed,
                bets,
                clicks,
                difficulty,
                answers,
                times,
                json,
            },
            out,
            err,
        ),
        Commands::Problems {
            difficulty,
            seed,
            json,
        } => handle_problems_command(difficulty, seed, json, out),
        Commands::Grade {
            difficulty,
            seed,
            wager,
            answers,
            times,
            json,
        } => handle_grade_command(
            GradeArgs {
                difficulty,
                seed,
                wager,
                answers,
                times,
                json,
            },
            out,
            err,
        ),
        Commands::Sim {
            game,
            rounds,
            wager,
            seed,
            output,
            starting_limit,
            bets,
            difficulty,
        } => handle_sim_command(
            SimArgs {
                game,
                rounds,
                wager,
                seed,
                output,
                starting_limit,
                bets,
                difficulty,
            },
            out,
            err,
        ),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Verify { input } => {
            let Some(path) = input else {
                let _ = ui::write_error(err, "input required");
                return exit_code::ERROR;
            };
            handle_verify_command(path, out, err)
        }
        Commands::Rng {
            seed,
            stream,
            count,
        } => handle_rng_command(seed, stream, count, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }
    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "MinuteCasino CLI");
    write_or_exit!(err, "Usage: minutecasino <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: minutecasino --help");
    exit_code::ERROR
}
