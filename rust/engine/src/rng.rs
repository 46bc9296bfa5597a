//! Seeded linear-congruential random streams.
//!
//! Every engine draws from one of two reproducible generators. Neither reads
//! external entropy: the whole stream is a pure function of the seed, so a
//! caller can regenerate a round (or a math problem batch) by replaying the
//! seed it used the first time.

use serde::{Deserialize, Serialize};

/// Integer seed identifying a random stream.
pub type Seed = i64;

/// A source of uniformly distributed draws in `[0, 1)`.
///
/// Only [`RandomStream::next_f64`] is required; the integer helpers are
/// derived from it with `floor(r * span) + min` so that every engine maps
/// draws to choices the same way.
pub trait RandomStream {
    /// Advance the stream and return a draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in the inclusive range `[min, max]`.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i64;
        min + offset.min(max - min)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }

    /// `true` with probability one half.
    fn next_bool(&mut self) -> bool {
        self.next_f64() >= 0.5
    }
}

/// Lehmer / Park–Miller minimal standard generator.
///
/// `state = state * 16807 mod (2^31 - 1)`, output `(state - 1) / (M - 1)`.
/// Used by the card and ball games (slots, blackjack, roulette) and the
/// jewel grid.
#[derive(Debug, Clone)]
pub struct ParkMiller {
    state: i64,
}

impl ParkMiller {
    pub const MULTIPLIER: i64 = 16_807;
    pub const MODULUS: i64 = 2_147_483_647;

    pub fn new(seed: Seed) -> Self {
        // zero is absorbing for a multiplicative generator
        let mut state = seed.rem_euclid(Self::MODULUS);
        if state == 0 {
            state = Self::MODULUS - 1;
        }
        Self { state }
    }

    pub fn state(&self) -> i64 {
        self.state
    }
}

impl RandomStream for ParkMiller {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER) % Self::MODULUS;
        (self.state - 1) as f64 / (Self::MODULUS - 1) as f64
    }
}

/// Small-period mixed congruential generator.
///
/// `state = (state * 9301 + 49297) mod 233280`, output `state / 233280`.
/// Used by plinko, pai-gow and the math challenge.
#[derive(Debug, Clone)]
pub struct MixedLcg {
    state: i64,
}

impl MixedLcg {
    pub const MULTIPLIER: i64 = 9_301;
    pub const INCREMENT: i64 = 49_297;
    pub const MODULUS: i64 = 233_280;

    pub fn new(seed: Seed) -> Self {
        Self {
            state: seed.rem_euclid(Self::MODULUS),
        }
    }

    pub fn state(&self) -> i64 {
        self.state
    }
}

impl RandomStream for MixedLcg {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}

/// Names the two generator families, for tooling that inspects raw streams.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreamKind {
    ParkMiller,
    Mixed,
}

impl StreamKind {
    /// First `n` draws of the stream seeded with `seed`.
    pub fn sample(self, seed: Seed, n: usize) -> Vec<f64> {
        match self {
            StreamKind::ParkMiller => {
                let mut rng = ParkMiller::new(seed);
                (0..n).map(|_| rng.next_f64()).collect()
            }
            StreamKind::Mixed => {
                let mut rng = MixedLcg::new(seed);
                (0..n).map(|_| rng.next_f64()).collect()
            }
        }
    }
}
