//! Jewel mining: a 4x4 grid hiding four bombs.

use serde::{Deserialize, Serialize};

use crate::engine::GameEngine;
use crate::errors::GameError;
use crate::game::GameKind;
use crate::outcome::{Outcome, ResultClass};
use crate::rng::{ParkMiller, RandomStream, Seed};

pub const GRID_SIZE: usize = 16;
pub const BOMB_COUNT: usize = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Gem,
    Bomb,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MineState {
    /// Sequence ended with no bomb and the cap not reached.
    Continue,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JewelMiningInput {
    pub wager: u32,
    /// Cells to reveal, in order. Distinct, each below [`GRID_SIZE`].
    pub clicks: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JewelMiningDisplay {
    pub grid: Vec<Cell>,
    pub revealed: Vec<usize>,
    pub final_state: MineState,
    pub accumulated: u32,
    pub bomb_position: Option<usize>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JewelMining;

/// Place [`BOMB_COUNT`] bombs by redrawing until the positions are distinct.
pub fn generate_grid(rng: &mut impl RandomStream) -> [Cell; GRID_SIZE] {
    let mut bombs: Vec<usize> = Vec::with_capacity(BOMB_COUNT);
    while bombs.len() < BOMB_COUNT {
        let pos = rng.next_index(GRID_SIZE);
        if !bombs.contains(&pos) {
            bombs.push(pos);
        }
    }
    let mut grid = [Cell::Gem; GRID_SIZE];
    for pos in bombs {
        grid[pos] = Cell::Bomb;
    }
    grid
}

/// Winnings per revealed gem: a fifth of the wager, rounded down.
pub fn gem_value(wager: u32) -> u32 {
    wager / 5
}

impl GameEngine for JewelMining {
    const KIND: GameKind = GameKind::JewelMining;
    type Input = JewelMiningInput;
    type Display = JewelMiningDisplay;

    fn check(&self, input: &JewelMiningInput) -> Result<(), GameError> {
        Self::KIND.check_wager(input.wager)?;
        let mut seen = [false; GRID_SIZE];
        for &pos in &input.clicks {
            if pos >= GRID_SIZE {
                return Err(GameError::InvalidInput(format!(
                    "cell {pos} is outside 0..{GRID_SIZE}"
                )));
            }
            if std::mem::replace(&mut seen[pos], true) {
                return Err(GameError::InvalidInput(format!("cell {pos} revealed twice")));
            }
        }
        Ok(())
    }

    fn simulate(
        &self,
        input: &JewelMiningInput,
        seed: Seed,
    ) -> Result<Outcome<JewelMiningDisplay>, GameError> {
        let mut rng = ParkMiller::new(seed);
        let grid = generate_grid(&mut rng);

        let mut accumulated = 0u32;
        let mut bomb_position = None;
        for &pos in &input.clicks {
            if grid[pos] == Cell::Bomb {
                bomb_position = Some(pos);
                break;
            }
            accumulated += gem_value(input.wager);
            if accumulated >= input.wager {
                accumulated = input.wager;
                break;
            }
        }

        let (result, delta, final_state) = if bomb_position.is_some() {
            accumulated = 0;
            (ResultClass::Loss, -i64::from(input.wager), MineState::Lost)
        } else if accumulated >= input.wager {
            (ResultClass::Win, i64::from(accumulated), MineState::Won)
        } else if accumulated > 0 {
            (ResultClass::Win, i64::from(accumulated), MineState::Continue)
        } else {
            (ResultClass::Push, 0, MineState::Continue)
        };

        Ok(Outcome::new(
            result,
            delta,
            JewelMiningDisplay {
                grid: grid.to_vec(),
                revealed: input.clicks.clone(),
                final_state,
                accumulated,
                bomb_position,
            },
        ))
    }
}
