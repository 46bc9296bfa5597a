//! Parsing and validation for command-line game arguments.
//!
//! This module turns the free-form flags of `play` and `sim` into engine
//! inputs. It handles:
//! - Roulette bet specs (`red:10`, `single:7:5`, `dozen:2:10`, ...)
//! - Round id format checks used by `verify`
//! - Math answer timings
//!
//! ## Error Handling
//!
//! Parsers return `Result<_, String>` with a message suitable for printing
//! after `Error:`.

use minutecasino_engine::roulette::{BetKind, Color, Parity, RouletteBet};

/// Parse a roulette bet spec into a sub-bet.
///
/// Accepts the following formats (case-insensitive):
/// - `red:AMT`, `black:AMT` → color bet
/// - `odd:AMT`, `even:AMT` → parity bet
/// - `single:N:AMT` (or `number:N:AMT`) → straight-up bet on pocket N
/// - `dozen:K:AMT`, `column:K:AMT` → dozen or column K in 1..=3
///
/// Range checks on targets are left to the engine, which rejects the whole
/// bet set before spinning.
///
/// # Example
///
/// ```rust
/// # use minutecasino_cli::validation::parse_bet_spec;
/// use minutecasino_engine::roulette::{BetKind, Color, RouletteBet};
///
/// assert_eq!(
///     parse_bet_spec("red:10"),
///     Ok(RouletteBet::new(BetKind::Color(Color::Red), 10))
/// );
/// assert_eq!(
///     parse_bet_spec("single:7:5"),
///     Ok(RouletteBet::new(BetKind::Number(7), 5))
/// );
/// assert!(parse_bet_spec("purple:5").is_err());
/// ```
pub fn parse_bet_spec(spec: &str) -> Result<RouletteBet, String> {
    let spec = spec.trim().to_ascii_lowercase();
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();

    let amount = |s: &str| -> Result<u32, String> {
        s.parse::<u32>()
            .map_err(|_| format!("invalid bet amount '{}' in '{}'", s, spec))
    };
    let target = |s: &str| -> Result<u8, String> {
        s.parse::<u8>()
            .map_err(|_| format!("invalid bet target '{}' in '{}'", s, spec))
    };

    let kind_and_amount = match parts.as_slice() {
        ["red", a] => (BetKind::Color(Color::Red), amount(a)?),
        ["black", a] => (BetKind::Color(Color::Black), amount(a)?),
        ["odd", a] => (BetKind::Parity(Parity::Odd), amount(a)?),
        ["even", a] => (BetKind::Parity(Parity::Even), amount(a)?),
        ["single" | "number", n, a] => (BetKind::Number(target(n)?), amount(a)?),
        ["dozen", k, a] => (BetKind::Dozen(target(k)?), amount(a)?),
        ["column", k, a] => (BetKind::Column(target(k)?), amount(a)?),
        _ => {
            return Err(format!(
                "Unrecognized bet '{}'. Valid bets: red:AMT, black:AMT, odd:AMT, even:AMT, single:N:AMT, dozen:K:AMT, column:K:AMT",
                spec
            ));
        }
    };
    let (kind, amount) = kind_and_amount;
    Ok(RouletteBet::new(kind, amount))
}

/// Parse every bet string, stopping at the first malformed one.
pub fn parse_bet_specs<S: AsRef<str>>(specs: &[S]) -> Result<Vec<RouletteBet>, String> {
    specs.iter().map(|s| parse_bet_spec(s.as_ref())).collect()
}

/// Check a round id of the form `YYYYMMDD-NNNNNN`.
///
/// # Example
///
/// ```rust
/// # use minutecasino_cli::validation::is_valid_round_id;
/// assert!(is_valid_round_id("20260101-000001"));
/// assert!(!is_valid_round_id("2026-01-01"));
/// ```
pub fn is_valid_round_id(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 15
        && b[..8].iter().all(u8::is_ascii_digit)
        && b[8] == b'-'
        && b[9..].iter().all(u8::is_ascii_digit)
}

/// Validate per-problem answer times in seconds.
///
/// # Example
///
/// ```rust
/// # use minutecasino_cli::validation::validate_times;
/// assert!(validate_times(&[3.5, 7.0]).is_ok());
/// assert!(validate_times(&[]).is_ok());
/// assert!(validate_times(&[-1.0]).is_err());
/// ```
pub fn validate_times(times: &[f64]) -> Result<(), String> {
    if let Some(t) = times.iter().find(|t| !t.is_finite() || **t < 0.0) {
        return Err(format!("time must be a non-negative number of seconds, got {}", t));
    }
    Ok(())
}
