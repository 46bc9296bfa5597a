use serde::{Deserialize, Serialize};

/// Normalized result class of one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultClass {
    Win,
    Loss,
    Push,
}

impl ResultClass {
    /// Classify by the sign of a net delta.
    pub fn from_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => ResultClass::Win,
            -1 => ResultClass::Loss,
            _ => ResultClass::Push,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResultClass::Win => "win",
            ResultClass::Loss => "loss",
            ResultClass::Push => "push",
        }
    }
}

impl std::fmt::Display for ResultClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a round produced: the result class, the signed credit change in
/// minutes, and an engine-specific payload describing what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<D> {
    pub result: ResultClass,
    pub delta: i64,
    pub display: D,
}

impl<D> Outcome<D> {
    pub fn new(result: ResultClass, delta: i64, display: D) -> Self {
        Self {
            result,
            delta,
            display,
        }
    }

    pub fn map_display<E>(self, f: impl FnOnce(D) -> E) -> Outcome<E> {
        Outcome {
            result: self.result,
            delta: self.delta,
            display: f(self.display),
        }
    }
}
