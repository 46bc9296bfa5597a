//! Game catalogue and per-game tunables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The seven game kinds. Ids are stable kebab-case strings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    Slots,
    Blackjack,
    Roulette,
    Plinko,
    PaiGow,
    #[serde(alias = "math-problems")]
    MathChallenge,
    JewelMining,
}

/// Read-only tunables for one game.
///
/// Only slots consumes the probabilities; the other engines derive their
/// odds from the simulated rules. `daily_cap` is enforced by whoever owns
/// the player's daily state, never by an engine.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct GameConfig {
    pub win_probability: f64,
    pub loss_probability: f64,
    pub min_wager: u32,
    pub max_wager: u32,
    pub daily_cap: u32,
}

impl GameKind {
    pub const ALL: [GameKind; 7] = [
        GameKind::Slots,
        GameKind::Blackjack,
        GameKind::Roulette,
        GameKind::Plinko,
        GameKind::PaiGow,
        GameKind::MathChallenge,
        GameKind::JewelMining,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GameKind::Slots => "slots",
            GameKind::Blackjack => "blackjack",
            GameKind::Roulette => "roulette",
            GameKind::Plinko => "plinko",
            GameKind::PaiGow => "pai-gow",
            GameKind::MathChallenge => "math-challenge",
            GameKind::JewelMining => "jewel-mining",
        }
    }

    pub const fn config(self) -> GameConfig {
        match self {
            GameKind::Slots => GameConfig {
                win_probability: 0.10,
                loss_probability: 0.85,
                min_wager: 5,
                max_wager: 60,
                daily_cap: 120,
            },
            GameKind::Blackjack => GameConfig {
                win_probability: 0.42,
                loss_probability: 0.49,
                min_wager: 10,
                max_wager: 45,
                daily_cap: 90,
            },
            GameKind::Roulette => GameConfig {
                win_probability: 0.47,
                loss_probability: 0.53,
                min_wager: 5,
                max_wager: 120,
                daily_cap: 180,
            },
            GameKind::Plinko => GameConfig {
                win_probability: 0.35,
                loss_probability: 0.65,
                min_wager: 10,
                max_wager: 80,
                daily_cap: 150,
            },
            GameKind::PaiGow => GameConfig {
                win_probability: 0.40,
                loss_probability: 0.45,
                min_wager: 15,
                max_wager: 60,
                daily_cap: 120,
            },
            GameKind::MathChallenge => GameConfig {
                win_probability: 0.60,
                loss_probability: 0.40,
                min_wager: 5,
                max_wager: 30,
                daily_cap: 90,
            },
            GameKind::JewelMining => GameConfig {
                win_probability: 0.25,
                loss_probability: 0.75,
                min_wager: 10,
                max_wager: 100,
                daily_cap: 200,
            },
        }
    }

    /// Rejects a wager outside the game's `[min_wager, max_wager]`.
    pub fn check_wager(self, amount: u32) -> Result<(), GameError> {
        let cfg = self.config();
        if amount < cfg.min_wager || amount > cfg.max_wager {
            return Err(GameError::InvalidWager {
                amount,
                min: cfg.min_wager,
                max: cfg.max_wager,
            });
        }
        Ok(())
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s == "math-problems" || s == "math" {
            return Ok(GameKind::MathChallenge);
        }
        GameKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or(GameError::UnknownGame(s))
    }
}
