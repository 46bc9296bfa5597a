//! Three-reel slot machine.
//!
//! The result class is decided first from the configured probabilities; the
//! reels are then drawn to match it.

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::errors::GameError;
use crate::game::GameKind;
use crate::outcome::{Outcome, ResultClass};
use crate::rng::{ParkMiller, RandomStream, Seed};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Cherry,
    Lemon,
    Orange,
    Grape,
    Diamond,
    Star,
    Bell,
}

impl Symbol {
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Cherry => "🍒",
            Symbol::Lemon => "🍋",
            Symbol::Orange => "🍊",
            Symbol::Grape => "🍇",
            Symbol::Diamond => "💎",
            Symbol::Star => "⭐",
            Symbol::Bell => "🔔",
        }
    }
}

/// Reel strip, also the order of the winning triples.
pub const SYMBOLS: [Symbol; 7] = [
    Symbol::Cherry,
    Symbol::Lemon,
    Symbol::Orange,
    Symbol::Grape,
    Symbol::Diamond,
    Symbol::Star,
    Symbol::Bell,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotsInput {
    pub wager: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotsDisplay {
    pub reels: [Symbol; 3],
    pub is_win: bool,
    pub payline: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Slots;

/// Every winning combination is a triple of one symbol.
pub fn is_winning(reels: &[Symbol; 3]) -> bool {
    reels[0] == reels[1] && reels[1] == reels[2]
}

fn draw_symbol(rng: &mut impl RandomStream) -> Symbol {
    SYMBOLS[rng.next_index(SYMBOLS.len())]
}

fn losing_reels(rng: &mut impl RandomStream) -> [Symbol; 3] {
    let mut reels = [draw_symbol(rng), draw_symbol(rng), draw_symbol(rng)];
    if is_winning(&reels) {
        reels[2] = SYMBOLS
            .iter()
            .copied()
            .find(|s| *s != reels[0])
            .unwrap_or(Symbol::Cherry);
    }
    reels
}

impl GameEngine for Slots {
    const KIND: GameKind = GameKind::Slots;
    type Input = SlotsInput;
    type Display = SlotsDisplay;

    fn check(&self, input: &SlotsInput) -> Result<(), GameError> {
        Self::KIND.check_wager(input.wager)
    }

    fn simulate(&self, input: &SlotsInput, seed: Seed) -> Result<Outcome<SlotsDisplay>, GameError> {
        let cfg = Self::KIND.config();
        let mut rng = ParkMiller::new(seed);

        let draw = rng.next_f64();
        let result = if draw < cfg.win_probability {
            ResultClass::Win
        } else if draw < cfg.win_probability + cfg.loss_probability {
            ResultClass::Loss
        } else {
            ResultClass::Push
        };

        let reels = match result {
            ResultClass::Win => [draw_symbol(&mut rng); 3],
            ResultClass::Loss | ResultClass::Push => losing_reels(&mut rng),
        };

        let wager = i64::from(input.wager);
        let delta = match result {
            ResultClass::Win => {
                let ratio = 1.5 + rng.next_f64() * 0.5;
                (f64::from(input.wager) * ratio).floor() as i64
            }
            ResultClass::Loss => -wager,
            ResultClass::Push => 0,
        };

        let is_win = result == ResultClass::Win;
        let payline = if is_win {
            format!("Three {}s!", reels[0].glyph())
        } else {
            "No match".to_string()
        };

        Ok(Outcome::new(
            result,
            delta,
            SlotsDisplay {
                reels,
                is_win,
                payline,
            },
        ))
    }
}
