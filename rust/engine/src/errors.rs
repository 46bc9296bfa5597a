use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid wager: {amount}, allowed range: {min}..={max}")]
    InvalidWager { amount: u32, min: u32, max: u32 },
    #[error("Invalid bet set: {0}")]
    InvalidBetSet(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Unknown game: {0}")]
    UnknownGame(String),
}
