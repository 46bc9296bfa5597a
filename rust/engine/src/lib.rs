//! # minutecasino-engine: Deterministic Game Simulators
//!
//! Rules engines for seven short casino-style games whose stake is screen
//! time. Every round is a pure function of `(input, seed)`: the same pair
//! always yields the same [`outcome::Outcome`], which makes rounds cheap to
//! log, replay and verify.
//!
//! ## Core Modules
//!
//! - [`rng`] - Park-Miller and mixed LCG streams behind [`rng::RandomStream`]
//! - [`cards`] / [`deck`] - Card types and Fisher-Yates shuffled decks
//! - [`hand`] - Poker category labels used by Pai-Gow
//! - [`game`] - Game ids and the per-game configuration table
//! - [`engine`] - The [`engine::GameEngine`] trait and enum dispatch
//! - [`slots`], [`blackjack`], [`roulette`], [`plinko`], [`pai_gow`],
//!   [`math_challenge`], [`jewel_mining`] - The engines
//! - [`limits`] - Clamped minute balances and daily tallies
//! - [`logger`] - JSONL round records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use minutecasino_engine::engine::{play, GameInput};
//! use minutecasino_engine::slots::SlotsInput;
//!
//! let input = GameInput::Slots(SlotsInput { wager: 10 });
//! let a = play(&input, 42).unwrap();
//! let b = play(&input, 42).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod blackjack;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod jewel_mining;
pub mod limits;
pub mod logger;
pub mod math_challenge;
pub mod outcome;
pub mod pai_gow;
pub mod plinko;
pub mod rng;
pub mod roulette;
pub mod slots;
