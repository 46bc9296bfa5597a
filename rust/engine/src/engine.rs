//! The shared engine contract and the tagged-union dispatch over all games.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::blackjack::{Blackjack, BlackjackDisplay, BlackjackInput};
use crate::errors::GameError;
use crate::game::GameKind;
use crate::jewel_mining::{JewelMining, JewelMiningDisplay, JewelMiningInput};
use crate::math_challenge::{MathChallenge, MathChallengeDisplay, MathChallengeInput};
use crate::outcome::Outcome;
use crate::pai_gow::{PaiGow, PaiGowDisplay, PaiGowInput};
use crate::plinko::{Plinko, PlinkoDisplay, PlinkoInput};
use crate::roulette::{Roulette, RouletteDisplay, RouletteInput};
use crate::rng::Seed;
use crate::slots::{Slots, SlotsDisplay, SlotsInput};

/// Common shape of every rules engine.
///
/// Engines are stateless: every call builds its own random stream, deck and
/// buffers from `(input, seed)`, so the same engine value can serve any number
/// of concurrent callers.
pub trait GameEngine {
    const KIND: GameKind;
    type Input;
    type Display;

    /// Pure input check. Never touches a random stream.
    fn check(&self, input: &Self::Input) -> Result<(), GameError>;

    /// Run the round on an input that already passed [`GameEngine::check`].
    fn simulate(&self, input: &Self::Input, seed: Seed)
        -> Result<Outcome<Self::Display>, GameError>;

    fn validate(&self, input: &Self::Input) -> bool {
        self.check(input).is_ok()
    }

    /// Validate, then simulate. Invalid input fails before any draw.
    fn play(&self, input: &Self::Input, seed: Seed) -> Result<Outcome<Self::Display>, GameError> {
        if let Err(e) = self.check(input) {
            warn!(game = %Self::KIND, seed, error = %e, "rejected round input");
            return Err(e);
        }
        let outcome = self.simulate(input, seed)?;
        debug!(
            game = %Self::KIND,
            seed,
            result = %outcome.result,
            delta = outcome.delta,
            "round settled"
        );
        Ok(outcome)
    }
}

/// Input for any game, tagged by game id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", content = "input", rename_all = "kebab-case")]
pub enum GameInput {
    Slots(SlotsInput),
    Blackjack(BlackjackInput),
    Roulette(RouletteInput),
    Plinko(PlinkoInput),
    PaiGow(PaiGowInput),
    MathChallenge(MathChallengeInput),
    JewelMining(JewelMiningInput),
}

/// Display payload for any game, tagged by game id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", content = "display", rename_all = "kebab-case")]
pub enum GameDisplay {
    Slots(SlotsDisplay),
    Blackjack(BlackjackDisplay),
    Roulette(RouletteDisplay),
    Plinko(PlinkoDisplay),
    PaiGow(PaiGowDisplay),
    MathChallenge(MathChallengeDisplay),
    JewelMining(JewelMiningDisplay),
}

impl GameInput {
    pub fn kind(&self) -> GameKind {
        match self {
            GameInput::Slots(_) => GameKind::Slots,
            GameInput::Blackjack(_) => GameKind::Blackjack,
            GameInput::Roulette(_) => GameKind::Roulette,
            GameInput::Plinko(_) => GameKind::Plinko,
            GameInput::PaiGow(_) => GameKind::PaiGow,
            GameInput::MathChallenge(_) => GameKind::MathChallenge,
            GameInput::JewelMining(_) => GameKind::JewelMining,
        }
    }

    /// Credit at stake: the wager, or the summed stakes for roulette.
    pub fn wager(&self) -> u64 {
        match self {
            GameInput::Slots(i) => i.wager.into(),
            GameInput::Blackjack(i) => i.wager.into(),
            GameInput::Roulette(i) => i.total_stake(),
            GameInput::Plinko(i) => i.wager.into(),
            GameInput::PaiGow(i) => i.wager.into(),
            GameInput::MathChallenge(i) => i.wager.into(),
            GameInput::JewelMining(i) => i.wager.into(),
        }
    }
}

impl GameDisplay {
    pub fn kind(&self) -> GameKind {
        match self {
            GameDisplay::Slots(_) => GameKind::Slots,
            GameDisplay::Blackjack(_) => GameKind::Blackjack,
            GameDisplay::Roulette(_) => GameKind::Roulette,
            GameDisplay::Plinko(_) => GameKind::Plinko,
            GameDisplay::PaiGow(_) => GameKind::PaiGow,
            GameDisplay::MathChallenge(_) => GameKind::MathChallenge,
            GameDisplay::JewelMining(_) => GameKind::JewelMining,
        }
    }
}

/// Check any game's input.
pub fn check(input: &GameInput) -> Result<(), GameError> {
    match input {
        GameInput::Slots(i) => Slots.check(i),
        GameInput::Blackjack(i) => Blackjack.check(i),
        GameInput::Roulette(i) => Roulette.check(i),
        GameInput::Plinko(i) => Plinko.check(i),
        GameInput::PaiGow(i) => PaiGow.check(i),
        GameInput::MathChallenge(i) => MathChallenge.check(i),
        GameInput::JewelMining(i) => JewelMining.check(i),
    }
}

pub fn validate(input: &GameInput) -> bool {
    check(input).is_ok()
}

/// Play one round of whichever game `input` names.
pub fn play(input: &GameInput, seed: Seed) -> Result<Outcome<GameDisplay>, GameError> {
    Ok(match input {
        GameInput::Slots(i) => Slots.play(i, seed)?.map_display(GameDisplay::Slots),
        GameInput::Blackjack(i) => Blackjack.play(i, seed)?.map_display(GameDisplay::Blackjack),
        GameInput::Roulette(i) => Roulette.play(i, seed)?.map_display(GameDisplay::Roulette),
        GameInput::Plinko(i) => Plinko.play(i, seed)?.map_display(GameDisplay::Plinko),
        GameInput::PaiGow(i) => PaiGow.play(i, seed)?.map_display(GameDisplay::PaiGow),
        GameInput::MathChallenge(i) => MathChallenge
            .play(i, seed)?
            .map_display(GameDisplay::MathChallenge),
        GameInput::JewelMining(i) => JewelMining
            .play(i, seed)?
            .map_display(GameDisplay::JewelMining),
    })
}
