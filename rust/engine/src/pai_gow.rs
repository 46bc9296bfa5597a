//! Simplified pai-gow poker.
//!
//! Player and dealer each receive seven cards and split them into a
//! five-card high hand and a two-card low hand with the same heuristic.
//! Sub-hands compare by their single highest card.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, PAI_GOW_RANKS, PAI_GOW_SUITS};
use crate::deck::Deck;
use crate::engine::GameEngine;
use crate::errors::GameError;
use crate::game::GameKind;
use crate::hand::{describe_hand, highest_value};
use crate::outcome::{Outcome, ResultClass};
use crate::rng::{MixedLcg, Seed};

pub const HOLDING_SIZE: usize = 7;
pub const HIGH_HAND_SIZE: usize = 5;

/// Fraction of the wager paid on a win.
pub const WIN_PAYOUT: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaiGowInput {
    pub wager: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Win,
    Lose,
    Tie,
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::Win,
            Ordering::Less => Comparison::Lose,
            Ordering::Equal => Comparison::Tie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitHand {
    pub high: Vec<Card>,
    pub low: Vec<Card>,
}

impl SplitHand {
    pub fn high_label(&self) -> String {
        describe_hand(&self.high)
    }

    pub fn low_label(&self) -> String {
        describe_hand(&self.low)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandComparison {
    pub high: Comparison,
    pub low: Comparison,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaiGowDisplay {
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player: SplitHand,
    pub dealer: SplitHand,
    pub player_high_label: String,
    pub player_low_label: String,
    pub dealer_high_label: String,
    pub dealer_low_label: String,
    pub comparison: HandComparison,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PaiGow;

/// Split a holding into high and low hands.
///
/// Cards are sorted by value, highest first, and adjacent equal values are
/// taken as pairs greedily. The highest pair becomes the low hand and the
/// high hand is the remaining pairs followed by the singles, cut to five.
/// Without a pair the two highest cards form the low hand.
pub fn arrange(cards: &[Card]) -> SplitHand {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.high_value().cmp(&a.high_value()));

    let mut pairs: Vec<[Card; 2]> = Vec::new();
    let mut singles: Vec<Card> = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        match sorted.get(i + 1) {
            Some(next) if next.high_value() == sorted[i].high_value() => {
                pairs.push([sorted[i], *next]);
                i += 2;
            }
            _ => {
                singles.push(sorted[i]);
                i += 1;
            }
        }
    }

    match pairs.split_first() {
        Some((top, rest)) => {
            let mut high: Vec<Card> = rest.iter().flatten().copied().collect();
            high.extend(singles);
            high.truncate(HIGH_HAND_SIZE);
            SplitHand {
                high,
                low: top.to_vec(),
            }
        }
        None => {
            let high = sorted.split_off(2.min(sorted.len()));
            SplitHand { high, low: sorted }
        }
    }
}

/// The house arranges its cards exactly like the player.
pub fn arrange_house_way(cards: &[Card]) -> SplitHand {
    arrange(cards)
}

pub fn compare(player: &[Card], dealer: &[Card]) -> Comparison {
    highest_value(player).cmp(&highest_value(dealer)).into()
}

impl GameEngine for PaiGow {
    const KIND: GameKind = GameKind::PaiGow;
    type Input = PaiGowInput;
    type Display = PaiGowDisplay;

    fn check(&self, input: &PaiGowInput) -> Result<(), GameError> {
        Self::KIND.check_wager(input.wager)
    }

    fn simulate(&self, input: &PaiGowInput, seed: Seed) -> Result<Outcome<PaiGowDisplay>, GameError> {
        let mut rng = MixedLcg::new(seed);
        let mut deck = Deck::new(&PAI_GOW_SUITS, &PAI_GOW_RANKS);
        deck.shuffle(&mut rng);

        let dealt = deck.cards();
        if dealt.len() < 2 * HOLDING_SIZE {
            return Err(GameError::DeckExhausted);
        }
        let player_cards = dealt[..HOLDING_SIZE].to_vec();
        let dealer_cards = dealt[HOLDING_SIZE..2 * HOLDING_SIZE].to_vec();

        let player = arrange(&player_cards);
        let dealer = arrange_house_way(&dealer_cards);

        let comparison = HandComparison {
            high: compare(&player.high, &dealer.high),
            low: compare(&player.low, &dealer.low),
        };

        let (result, delta) = match (comparison.high, comparison.low) {
            (Comparison::Win, Comparison::Win) => (
                ResultClass::Win,
                (f64::from(input.wager) * WIN_PAYOUT).round() as i64,
            ),
            (Comparison::Lose, Comparison::Lose) => (ResultClass::Loss, -i64::from(input.wager)),
            _ => (ResultClass::Push, 0),
        };

        Ok(Outcome::new(
            result,
            delta,
            PaiGowDisplay {
                player_high_label: player.high_label(),
                player_low_label: player.low_label(),
                dealer_high_label: dealer.high_label(),
                dealer_low_label: dealer.low_label(),
                player_cards,
                dealer_cards,
                player,
                dealer,
                comparison,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(s: Suit, r: Rank) -> Card {
        Card::new(s, r)
    }

    #[test]
    fn highest_pair_goes_low() {
        let cards = [
            c(Suit::Hearts, Rank::Nine),
            c(Suit::Clubs, Rank::King),
            c(Suit::Spades, Rank::Nine),
            c(Suit::Hearts, Rank::King),
            c(Suit::Diamonds, Rank::Two),
            c(Suit::Clubs, Rank::Five),
            c(Suit::Spades, Rank::Ace),
        ];
        let split = arrange(&cards);
        assert!(split.low.iter().all(|c| c.rank == Rank::King));
        assert_eq!(split.high.len(), HIGH_HAND_SIZE);
        assert_eq!(split.high[0].rank, Rank::Nine);
        assert_eq!(split.high[2].rank, Rank::Ace);
        assert_eq!(split.low_label(), "Pair of Ks");
    }

    #[test]
    fn no_pair_puts_top_two_low() {
        let cards = [
            c(Suit::Hearts, Rank::Two),
            c(Suit::Clubs, Rank::Jack),
            c(Suit::Spades, Rank::Four),
            c(Suit::Hearts, Rank::Ace),
            c(Suit::Diamonds, Rank::Seven),
            c(Suit::Clubs, Rank::Nine),
            c(Suit::Spades, Rank::Three),
        ];
        let split = arrange(&cards);
        assert_eq!(
            split.low.iter().map(|c| c.rank).collect::<Vec<_>>(),
            vec![Rank::Ace, Rank::Jack]
        );
        assert_eq!(split.high.len(), 5);
        assert_eq!(split.low_label(), "A High");
    }

    #[test]
    fn trips_split_into_pair_and_single() {
        let cards = [
            c(Suit::Hearts, Rank::Queen),
            c(Suit::Clubs, Rank::Queen),
            c(Suit::Spades, Rank::Queen),
            c(Suit::Hearts, Rank::Two),
            c(Suit::Diamonds, Rank::Three),
            c(Suit::Clubs, Rank::Four),
            c(Suit::Spades, Rank::Six),
        ];
        let split = arrange(&cards);
        assert_eq!(split.low_label(), "Pair of Qs");
        assert_eq!(split.high[0].rank, Rank::Queen);
        assert_eq!(split.high.len(), 5);
    }
}
