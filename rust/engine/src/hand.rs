use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Descriptive category of a five-card pai-gow hand.
///
/// Only used for labelling; sub-hands are compared by their single highest
/// card, not by category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Flush = 4,
    FullHouse = 5,
    FourOfAKind = 6,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
        }
    }
}

/// Categorise a hand by rank multiplicities and suit uniformity.
///
/// Straights are not recognised. The checks run in a fixed order, so a flush
/// outranks trips but not a full house.
pub fn categorize(cards: &[Card]) -> Category {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    for &c in cards {
        rank_counts[c.high_value() as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
    }

    let mut counts: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let first = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);
    let single_suit = !cards.is_empty() && suit_counts.iter().filter(|&&n| n > 0).count() == 1;

    if first == 4 {
        Category::FourOfAKind
    } else if first == 3 && second == 2 {
        Category::FullHouse
    } else if single_suit {
        Category::Flush
    } else if first == 3 {
        Category::ThreeOfAKind
    } else if first == 2 && second == 2 {
        Category::TwoPair
    } else if first == 2 {
        Category::OnePair
    } else {
        Category::HighCard
    }
}

/// Human label for a sub-hand.
///
/// Two-card hands read `Pair of Ks` or `K High`; anything else uses the
/// five-card category label.
pub fn describe_hand(cards: &[Card]) -> String {
    if let [a, b] = cards {
        if a.high_value() == b.high_value() {
            return format!("Pair of {}s", a.rank.label());
        }
        let high = if b.high_value() > a.high_value() { b } else { a };
        return format!("{} High", high.rank.label());
    }
    categorize(cards).label().to_string()
}

/// The single highest card value in a hand, 0 when empty.
pub fn highest_value(cards: &[Card]) -> u8 {
    cards.iter().map(|c| c.high_value()).max().unwrap_or(0)
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}
