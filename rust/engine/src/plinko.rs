//! Plinko: a chip falls through twelve rows of pegs into one of eleven
//! multiplier slots.

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::errors::GameError;
use crate::game::GameKind;
use crate::outcome::{Outcome, ResultClass};
use crate::rng::{MixedLcg, RandomStream, Seed};

pub const ROWS: usize = 12;

/// Slot multipliers, symmetric around the centre slot.
pub const MULTIPLIERS: [f64; 11] = [0.1, 0.3, 0.5, 1.0, 1.5, 2.0, 1.5, 1.0, 0.5, 0.3, 0.1];

pub const CENTER_SLOT: usize = MULTIPLIERS.len() / 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bounce {
    Left,
    Right,
}

impl Bounce {
    fn step(self) -> i64 {
        match self {
            Bounce::Left => -1,
            Bounce::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlinkoInput {
    pub wager: u32,
}

/// Chip offset from the centre after `row` bounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipPosition {
    pub row: usize,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlinkoDisplay {
    pub path: Vec<Bounce>,
    pub final_slot: usize,
    pub multiplier: f64,
    pub chip_positions: Vec<ChipPosition>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Plinko;

/// Slot reached by a path, clamped to the board.
pub fn final_slot(path: &[Bounce]) -> usize {
    let offset: i64 = path.iter().map(|b| b.step()).sum();
    let slot = CENTER_SLOT as i64 + offset;
    slot.clamp(0, MULTIPLIERS.len() as i64 - 1) as usize
}

fn chip_positions(path: &[Bounce]) -> Vec<ChipPosition> {
    let mut positions = Vec::with_capacity(path.len() + 1);
    let mut position = 0;
    positions.push(ChipPosition { row: 0, position });
    for (row, bounce) in path.iter().enumerate() {
        position += bounce.step();
        positions.push(ChipPosition {
            row: row + 1,
            position,
        });
    }
    positions
}

/// Settles a wager against a slot multiplier.
///
/// Multipliers of at least 1.0 pay `round(wager * m - wager)` (a push when
/// that is zero); smaller ones cost `round(wager * (1 - m))`.
pub fn settle(wager: u32, multiplier: f64) -> (ResultClass, i64) {
    let wager = f64::from(wager);
    if multiplier >= 1.0 {
        let delta = (wager * multiplier - wager).round() as i64;
        let result = if delta > 0 {
            ResultClass::Win
        } else {
            ResultClass::Push
        };
        (result, delta)
    } else {
        (ResultClass::Loss, -((wager * (1.0 - multiplier)).round() as i64))
    }
}

impl GameEngine for Plinko {
    const KIND: GameKind = GameKind::Plinko;
    type Input = PlinkoInput;
    type Display = PlinkoDisplay;

    fn check(&self, input: &PlinkoInput) -> Result<(), GameError> {
        Self::KIND.check_wager(input.wager)
    }

    fn simulate(&self, input: &PlinkoInput, seed: Seed) -> Result<Outcome<PlinkoDisplay>, GameError> {
        let mut rng = MixedLcg::new(seed);
        let path: Vec<Bounce> = (0..ROWS)
            .map(|_| {
                if rng.next_bool() {
                    Bounce::Right
                } else {
                    Bounce::Left
                }
            })
            .collect();

        let final_slot = final_slot(&path);
        let multiplier = MULTIPLIERS[final_slot];
        let (result, delta) = settle(input.wager, multiplier);

        Ok(Outcome::new(
            result,
            delta,
            PlinkoDisplay {
                chip_positions: chip_positions(&path),
                path,
                final_slot,
                multiplier,
            },
        ))
    }
}
