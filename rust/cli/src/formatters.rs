//! Human-readable rendering of round outcomes.
//!
//! This module provides pure functions that turn engine display payloads into
//! short terminal summaries. Card suits use Unicode symbols with an ASCII
//! fallback for terminals that cannot render them.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The module detects whether the terminal supports Unicode symbols by
//! checking environment variables on Windows (WT_SESSION, TERM_PROGRAM,
//! VSCODE_INJECTION) and assumes Unicode support on Unix-like systems.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use minutecasino_engine::cards::{Card, Rank, Suit};
//! use minutecasino_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use minutecasino_engine::blackjack::{BlackjackDisplay, TableState};
use minutecasino_engine::cards::{Card, Suit};
use minutecasino_engine::engine::GameDisplay;
use minutecasino_engine::jewel_mining::{JewelMiningDisplay, MineState};
use minutecasino_engine::math_challenge::{MathChallengeDisplay, MathProblem};
use minutecasino_engine::outcome::Outcome;
use minutecasino_engine::pai_gow::{Comparison, PaiGowDisplay};
use minutecasino_engine::plinko::{Bounce, PlinkoDisplay};
use minutecasino_engine::roulette::{BetKind, Color, Parity, RouletteBet, RouletteDisplay};
use minutecasino_engine::slots::SlotsDisplay;

use crate::ui::format_delta;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Cards in bracket notation, e.g. "[A♠ K♥]", or "[]" if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_bet(bet: &RouletteBet) -> String {
    let target = match bet.kind {
        BetKind::Color(Color::Red) => "red".to_string(),
        BetKind::Color(Color::Black) => "black".to_string(),
        BetKind::Color(Color::Green) => "green".to_string(),
        BetKind::Parity(Parity::Odd) => "odd".to_string(),
        BetKind::Parity(Parity::Even) => "even".to_string(),
        BetKind::Number(n) => format!("single {}", n),
        BetKind::Dozen(d) => format!("dozen {}", d),
        BetKind::Column(c) => format!("column {}", c),
    };
    format!("{} x{}", target, bet.amount)
}

fn table_state_label(state: TableState) -> &'static str {
    match state {
        TableState::PlayerBust => "player bust",
        TableState::DealerBust => "dealer bust",
        TableState::Push => "push",
        TableState::PlayerWin => "player wins",
        TableState::DealerWin => "dealer wins",
    }
}

fn comparison_label(c: Comparison) -> &'static str {
    match c {
        Comparison::Win => "win",
        Comparison::Lose => "lose",
        Comparison::Tie => "tie",
    }
}

fn slots_lines(d: &SlotsDisplay) -> Vec<String> {
    let reels: Vec<&str> = d.reels.iter().map(|s| s.glyph()).collect();
    vec![format!("Reels: {}", reels.join(" | ")), d.payline.clone()]
}

fn blackjack_lines(d: &BlackjackDisplay) -> Vec<String> {
    vec![
        format!("Player: {} ({})", format_cards(&d.player_hand), d.player_total),
        format!("Dealer: {} ({})", format_cards(&d.dealer_hand), d.dealer_total),
        format!("Table: {}", table_state_label(d.state)),
    ]
}

fn roulette_lines(d: &RouletteDisplay) -> Vec<String> {
    let color = match d.winning_color {
        Color::Red => "red",
        Color::Black => "black",
        Color::Green => "green",
    };
    let list = |bets: &[RouletteBet]| -> String {
        if bets.is_empty() {
            "-".to_string()
        } else {
            bets.iter().map(format_bet).collect::<Vec<_>>().join(", ")
        }
    };
    vec![
        format!("Ball: {} {}", d.winning_number, color),
        format!("Winning bets: {}", list(&d.winning_bets)),
        format!("Losing bets: {}", list(&d.losing_bets)),
    ]
}

fn plinko_lines(d: &PlinkoDisplay) -> Vec<String> {
    let path: String = d
        .path
        .iter()
        .map(|b| match b {
            Bounce::Left => 'L',
            Bounce::Right => 'R',
        })
        .collect();
    vec![
        format!("Path: {}", path),
        format!("Slot: {} (x{})", d.final_slot, d.multiplier),
    ]
}

fn pai_gow_lines(d: &PaiGowDisplay) -> Vec<String> {
    vec![
        format!(
            "Player: high {} {} / low {} {}",
            format_cards(&d.player.high),
            d.player_high_label,
            format_cards(&d.player.low),
            d.player_low_label
        ),
        format!(
            "Dealer: high {} {} / low {} {}",
            format_cards(&d.dealer.high),
            d.dealer_high_label,
            format_cards(&d.dealer.low),
            d.dealer_low_label
        ),
        format!(
            "High hand: {}, low hand: {}",
            comparison_label(d.comparison.high),
            comparison_label(d.comparison.low)
        ),
    ]
}

fn math_lines(d: &MathChallengeDisplay) -> Vec<String> {
    let mut lines: Vec<String> = d
        .problems
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let given = d
                .user_answers
                .get(i)
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string());
            let mark = if d.user_answers.get(i) == Some(&p.answer) {
                "ok"
            } else {
                "x"
            };
            format!("{} {} (answered {}) {}", p.question, p.answer, given, mark)
        })
        .collect();
    lines.push(format!(
        "Correct: {}/{} accuracy {:.2} bonus x{:.2}",
        d.total_correct, d.total_problems, d.accuracy, d.bonus_multiplier
    ));
    lines
}

fn jewel_lines(d: &JewelMiningDisplay) -> Vec<String> {
    let state = match d.final_state {
        MineState::Continue => "cashed out",
        MineState::Won => "cleared",
        MineState::Lost => "bomb",
    };
    let mut lines = vec![format!(
        "Revealed: {:?} -> {} (gems worth {})",
        d.revealed, state, d.accumulated
    )];
    if let Some(pos) = d.bomb_position {
        lines.push(format!("Bomb at cell {}", pos));
    }
    lines
}

/// Display-specific lines for one round.
pub fn display_lines(display: &GameDisplay) -> Vec<String> {
    match display {
        GameDisplay::Slots(d) => slots_lines(d),
        GameDisplay::Blackjack(d) => blackjack_lines(d),
        GameDisplay::Roulette(d) => roulette_lines(d),
        GameDisplay::Plinko(d) => plinko_lines(d),
        GameDisplay::PaiGow(d) => pai_gow_lines(d),
        GameDisplay::MathChallenge(d) => math_lines(d),
        GameDisplay::JewelMining(d) => jewel_lines(d),
    }
}

/// Full text summary: header with result and delta, then the display lines.
pub fn format_outcome(seed: i64, outcome: &Outcome<GameDisplay>) -> String {
    let mut lines = vec![format!(
        "{} seed={} result={} delta={}",
        outcome.display.kind(),
        seed,
        outcome.result,
        format_delta(outcome.delta)
    )];
    lines.extend(display_lines(&outcome.display).into_iter().map(|l| format!("  {}", l)));
    lines.join("\n")
}

/// One numbered problem with its options, for the `problems` command.
pub fn format_problem(index: usize, problem: &MathProblem) -> String {
    let options: Vec<String> = problem.options.iter().map(|o| o.to_string()).collect();
    format!(
        "{}. {}  [{}]  ({}s)",
        index + 1,
        problem.question,
        options.join(" / "),
        problem.time_limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use minutecasino_engine::cards::Rank;
    use minutecasino_engine::engine::{play, GameInput};
    use minutecasino_engine::roulette::RouletteInput;

    #[test]
    fn ten_uses_two_digit_label() {
        let c = Card::new(Suit::Hearts, Rank::Ten);
        assert!(format_card(&c).starts_with("10"));
    }

    #[test]
    fn empty_card_list() {
        assert_eq!(format_cards(&[]), "[]");
    }

    #[test]
    fn bets_are_named_by_shape() {
        assert_eq!(
            format_bet(&RouletteBet::new(BetKind::Number(7), 5)),
            "single 7 x5"
        );
        assert_eq!(
            format_bet(&RouletteBet::new(BetKind::Color(Color::Red), 10)),
            "red x10"
        );
    }

    #[test]
    fn outcome_header_names_game_and_seed() {
        let input = GameInput::Roulette(RouletteInput {
            bets: vec![RouletteBet::new(BetKind::Color(Color::Red), 10)],
        });
        let out = play(&input, 9).unwrap();
        let text = format_outcome(9, &out);
        assert!(text.starts_with("roulette seed=9 result="));
        assert!(text.contains("Ball: "));
    }
}
