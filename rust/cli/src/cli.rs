//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use minutecasino_engine::game::GameKind;
use minutecasino_engine::math_challenge::Difficulty;
use minutecasino_engine::rng::StreamKind;

#[derive(Parser, Debug)]
#[command(
    name = "minutecasino",
    version,
    about = "Deterministic screen-time casino games"
)]
pub struct MinuteCasinoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one round of a game
    Play {
        #[arg(long)]
        game: GameKind,
        /// Minutes at stake (roulette stakes come from --bet)
        #[arg(long)]
        wager: Option<u32>,
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,
        /// Roulette bet, e.g. red:10, single:7:5, dozen:2:10
        #[arg(long = "bet")]
        bets: Vec<String>,
        /// Jewel-mining cell to reveal, in order
        #[arg(long = "click")]
        clicks: Vec<usize>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Math-challenge answer, in problem order
        #[arg(long = "answer", allow_hyphen_values = true)]
        answers: Vec<i64>,
        /// Seconds spent on each math problem
        #[arg(long = "time")]
        times: Vec<f64>,
        /// Print the whole outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a math-challenge problem batch
    Problems {
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    /// Grade math-challenge answers against the batch regenerated from a seed
    Grade {
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long, allow_hyphen_values = true)]
        seed: i64,
        #[arg(long)]
        wager: Option<u32>,
        #[arg(long = "answer", allow_hyphen_values = true)]
        answers: Vec<i64>,
        #[arg(long = "time")]
        times: Vec<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Play many automated rounds and record them as JSONL
    Sim {
        #[arg(long)]
        game: GameKind,
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        rounds: u64,
        #[arg(long)]
        wager: Option<u32>,
        /// Base seed; each round's seed is drawn from a stream seeded with it
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (.jsonl or .jsonl.zst)
        #[arg(long)]
        output: Option<String>,
        #[arg(long = "starting-limit")]
        starting_limit: Option<i64>,
        #[arg(long = "bet")]
        bets: Vec<String>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    /// Summarise recorded rounds per game
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Replay recorded rounds and check they reproduce
    Verify {
        #[arg(long)]
        input: Option<String>,
    },
    /// Print raw draws from a random stream
    Rng {
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,
        #[arg(long, value_enum, default_value_t = Stream::ParkMiller)]
        stream: Stream,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Show resolved configuration
    Cfg,
}

/// Random stream family for the `rng` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Stream {
    /// Park-Miller (slots, blackjack, roulette, jewel mining)
    ParkMiller,
    /// Mixed LCG (plinko, pai-gow, math challenge)
    Mixed,
}

impl From<Stream> for StreamKind {
    fn from(s: Stream) -> Self {
        match s {
            Stream::ParkMiller => StreamKind::ParkMiller,
            Stream::Mixed => StreamKind::Mixed,
        }
    }
}

impl Stream {
    /// # Examples
    ///
    /// ```
    /// # use minutecasino_cli::cli::Stream;
    /// assert_eq!(Stream::Mixed.as_str(), "mixed");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::ParkMiller => "park-miller",
            Stream::Mixed => "mixed",
        }
    }
}
