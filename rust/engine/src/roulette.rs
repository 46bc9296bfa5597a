//! Single-zero roulette with simultaneous sub-bets.
//!
//! Payouts are total-return multipliers: a winning stake `s` on an even-money
//! bet returns `2s`, on a dozen or column `3s`, on a single number `36s`.
//! The round's delta is total return minus total losing stakes.

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::errors::GameError;
use crate::game::GameKind;
use crate::outcome::{Outcome, ResultClass};
use crate::rng::{ParkMiller, RandomStream, Seed};

/// Pockets 0..=36.
pub const POCKETS: usize = 37;

/// Red pockets; every other non-zero pocket is black.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Green,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
}

/// Shape of a sub-bet. Dozens and columns are numbered 1..=3.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "target")]
pub enum BetKind {
    Color(Color),
    Parity(Parity),
    Number(u8),
    Dozen(u8),
    Column(u8),
}

impl BetKind {
    /// Total-return multiplier applied to a winning stake.
    pub fn multiplier(self) -> u32 {
        match self {
            BetKind::Color(_) | BetKind::Parity(_) => 2,
            BetKind::Dozen(_) | BetKind::Column(_) => 3,
            BetKind::Number(_) => 36,
        }
    }

    /// Whether this bet wins when the ball lands on `pocket`.
    pub fn wins_on(self, pocket: u8) -> bool {
        match self {
            BetKind::Color(c) => pocket_color(pocket) == c,
            BetKind::Parity(p) => {
                pocket != 0
                    && match p {
                        Parity::Odd => pocket % 2 == 1,
                        Parity::Even => pocket % 2 == 0,
                    }
            }
            BetKind::Number(n) => pocket == n,
            BetKind::Dozen(d) => pocket != 0 && (1..=3).contains(&d) && (pocket - 1) / 12 + 1 == d,
            BetKind::Column(c) => pocket != 0 && (1..=3).contains(&c) && pocket % 3 == c % 3,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RouletteBet {
    pub kind: BetKind,
    pub amount: u32,
}

impl RouletteBet {
    pub fn new(kind: BetKind, amount: u32) -> Self {
        Self { kind, amount }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouletteInput {
    pub bets: Vec<RouletteBet>,
}

impl RouletteInput {
    pub fn total_stake(&self) -> u64 {
        self.bets.iter().map(|b| u64::from(b.amount)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouletteDisplay {
    pub winning_number: u8,
    pub winning_color: Color,
    pub ball_path: Vec<u8>,
    pub winning_bets: Vec<RouletteBet>,
    pub losing_bets: Vec<RouletteBet>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Roulette;

pub fn pocket_color(pocket: u8) -> Color {
    if pocket == 0 {
        Color::Green
    } else if RED_NUMBERS.contains(&pocket) {
        Color::Red
    } else {
        Color::Black
    }
}

/// Pockets the ball passes over: three or four laps, the last one stopping
/// on the winning pocket.
fn ball_path(winning: u8, rng: &mut impl RandomStream) -> Vec<u8> {
    let laps = 3 + rng.next_index(2);
    let mut path = Vec::with_capacity(laps * POCKETS);
    for lap in 0..laps {
        let last = if lap == laps - 1 { winning } else { 36 };
        path.extend(0..=last);
    }
    path
}

fn check_bet(bet: &RouletteBet) -> Result<(), GameError> {
    if bet.amount == 0 {
        return Err(GameError::InvalidBetSet("stake must be positive".into()));
    }
    match bet.kind {
        BetKind::Color(Color::Green) => Err(GameError::InvalidBetSet(
            "green is not a bettable color".into(),
        )),
        BetKind::Number(n) if usize::from(n) >= POCKETS => Err(GameError::InvalidBetSet(format!(
            "number {n} is outside 0..=36"
        ))),
        BetKind::Dozen(d) if !(1..=3).contains(&d) => Err(GameError::InvalidBetSet(format!(
            "dozen {d} is outside 1..=3"
        ))),
        BetKind::Column(c) if !(1..=3).contains(&c) => Err(GameError::InvalidBetSet(format!(
            "column {c} is outside 1..=3"
        ))),
        _ => Ok(()),
    }
}

impl GameEngine for Roulette {
    const KIND: GameKind = GameKind::Roulette;
    type Input = RouletteInput;
    type Display = RouletteDisplay;

    fn check(&self, input: &RouletteInput) -> Result<(), GameError> {
        if input.bets.is_empty() {
            return Err(GameError::InvalidBetSet("at least one bet is required".into()));
        }
        input.bets.iter().try_for_each(check_bet)?;
        let total = u32::try_from(input.total_stake()).unwrap_or(u32::MAX);
        Self::KIND.check_wager(total)
    }

    fn simulate(
        &self,
        input: &RouletteInput,
        seed: Seed,
    ) -> Result<Outcome<RouletteDisplay>, GameError> {
        let mut rng = ParkMiller::new(seed);
        let winning_number = rng.next_index(POCKETS) as u8;
        let ball_path = ball_path(winning_number, &mut rng);

        let (winning_bets, losing_bets): (Vec<RouletteBet>, Vec<RouletteBet>) = input
            .bets
            .iter()
            .partition(|b| b.kind.wins_on(winning_number));

        let payout: i64 = winning_bets
            .iter()
            .map(|b| i64::from(b.amount) * i64::from(b.kind.multiplier()))
            .sum();
        let lost: i64 = losing_bets.iter().map(|b| i64::from(b.amount)).sum();
        let delta = payout - lost;

        Ok(Outcome::new(
            ResultClass::from_delta(delta),
            delta,
            RouletteDisplay {
                winning_number,
                winning_color: pocket_color(winning_number),
                ball_path,
                winning_bets,
                losing_bets,
            },
        ))
    }
}
