//! Single-deck blackjack with automatic player strategy.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, BLACKJACK_RANKS, BLACKJACK_SUITS};
use crate::deck::Deck;
use crate::engine::GameEngine;
use crate::errors::GameError;
use crate::game::GameKind;
use crate::outcome::{Outcome, ResultClass};
use crate::rng::{ParkMiller, Seed};

/// Dealer stands on all 17s including soft 17.
pub const DEALER_STANDS_AT: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackInput {
    pub wager: u32,
}

/// Terminal state of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableState {
    PlayerBust,
    DealerBust,
    Push,
    PlayerWin,
    DealerWin,
}

impl TableState {
    pub fn result(self) -> ResultClass {
        match self {
            TableState::PlayerWin | TableState::DealerBust => ResultClass::Win,
            TableState::PlayerBust | TableState::DealerWin => ResultClass::Loss,
            TableState::Push => ResultClass::Push,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackDisplay {
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<Card>,
    pub player_total: u32,
    pub dealer_total: u32,
    pub state: TableState,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Blackjack;

/// Hand total with soft-ace reduction.
///
/// Every ace starts at 11; while the total is over 21 and an ace is still
/// counted high, one ace drops to 1.
pub fn hand_value(cards: &[Card]) -> u32 {
    let mut value = 0;
    let mut aces = 0;
    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += card.blackjack_value();
    }
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }
    value
}

/// Simplified basic strategy: always hit 11 or less, always stand on 17 or
/// more, and hit 12..=16 only against a dealer seven or better.
pub fn should_hit(hand: &[Card], dealer_up: Card) -> bool {
    let value = hand_value(hand);
    if value <= 11 {
        return true;
    }
    if value >= 17 {
        return false;
    }
    dealer_up.blackjack_value() >= 7
}

fn draw(deck: &mut Deck) -> Result<Card, GameError> {
    deck.deal().ok_or(GameError::DeckExhausted)
}

impl GameEngine for Blackjack {
    const KIND: GameKind = GameKind::Blackjack;
    type Input = BlackjackInput;
    type Display = BlackjackDisplay;

    fn check(&self, input: &BlackjackInput) -> Result<(), GameError> {
        Self::KIND.check_wager(input.wager)
    }

    fn simulate(
        &self,
        input: &BlackjackInput,
        seed: Seed,
    ) -> Result<Outcome<BlackjackDisplay>, GameError> {
        let mut rng = ParkMiller::new(seed);
        let mut deck = Deck::new(&BLACKJACK_SUITS, &BLACKJACK_RANKS);
        deck.shuffle(&mut rng);

        let mut player_hand = vec![draw(&mut deck)?, draw(&mut deck)?];
        let mut dealer_hand = vec![draw(&mut deck)?, draw(&mut deck)?];
        let dealer_up = dealer_hand[0];

        while should_hit(&player_hand, dealer_up) {
            player_hand.push(draw(&mut deck)?);
            if hand_value(&player_hand) > 21 {
                break;
            }
        }

        let player_total = hand_value(&player_hand);
        let state = if player_total > 21 {
            TableState::PlayerBust
        } else {
            while hand_value(&dealer_hand) < DEALER_STANDS_AT {
                dealer_hand.push(draw(&mut deck)?);
            }
            let dealer_total = hand_value(&dealer_hand);
            if dealer_total > 21 {
                TableState::DealerBust
            } else if player_total > dealer_total {
                TableState::PlayerWin
            } else if dealer_total > player_total {
                TableState::DealerWin
            } else {
                TableState::Push
            }
        };

        let result = state.result();
        let wager = i64::from(input.wager);
        let delta = match result {
            ResultClass::Win => wager,
            ResultClass::Loss => -wager,
            ResultClass::Push => 0,
        };

        Ok(Outcome::new(
            result,
            delta,
            BlackjackDisplay {
                dealer_total: hand_value(&dealer_hand),
                player_hand,
                dealer_hand,
                player_total,
                state,
            },
        ))
    }
}
