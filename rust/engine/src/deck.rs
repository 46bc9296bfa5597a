use crate::cards::{ordered_deck, Card, Rank, Suit};
use crate::rng::RandomStream;

/// A fresh 52-card deck owned by a single `play` call.
///
/// Shuffling is an in-place Fisher–Yates driven by the caller's stream.
/// Dealing removes cards from the tail.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(suits: &[Suit; 4], ranks: &[Rank; 13]) -> Self {
        Self {
            cards: ordered_deck(suits, ranks),
        }
    }

    pub fn shuffle<R: RandomStream + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.next_index(i + 1);
            self.cards.swap(i, j);
        }
    }

    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards in current order, index 0 first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
