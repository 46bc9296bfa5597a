//! Time-credit bookkeeping shared by every game.
//!
//! Engines only report a signed delta; applying it to a player's remaining
//! minutes happens here, behind [`CreditSink`].

use serde::{Deserialize, Serialize};

use crate::outcome::ResultClass;

pub const MIN_LIMIT_MINUTES: i64 = 1;
pub const MAX_LIMIT_MINUTES: i64 = 720;

pub fn clamp_limit(minutes: i64) -> i64 {
    minutes.clamp(MIN_LIMIT_MINUTES, MAX_LIMIT_MINUTES)
}

/// Something a round's delta can be applied to.
pub trait CreditSink {
    /// Apply `delta`; returns whether the stored value changed.
    fn apply_delta(&mut self, delta: i64) -> bool;
}

/// A remaining-minutes counter that always stays inside
/// `MIN_LIMIT_MINUTES..=MAX_LIMIT_MINUTES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampedLimit {
    minutes: i64,
}

impl ClampedLimit {
    pub fn new(minutes: i64) -> Self {
        Self {
            minutes: clamp_limit(minutes),
        }
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl CreditSink for ClampedLimit {
    fn apply_delta(&mut self, delta: i64) -> bool {
        let next = clamp_limit(self.minutes.saturating_add(delta));
        let changed = next != self.minutes;
        self.minutes = next;
        changed
    }
}

/// Per-day counters for a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTally {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub net_delta: i64,
}

impl DailyTally {
    pub fn record(&mut self, result: ResultClass, delta: i64) {
        self.games_played += 1;
        match result {
            ResultClass::Win => self.wins += 1,
            ResultClass::Loss => self.losses += 1,
            ResultClass::Push => self.pushes += 1,
        }
        self.net_delta += delta;
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }
}
