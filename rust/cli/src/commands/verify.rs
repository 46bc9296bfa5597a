//! Verify command handler module.
//!
//! Replays every round in a JSONL log and checks that it reproduces:
//!
//! - Round ids are well formed (`YYYYMMDD-NNNNNN`) and unique
//! - The recorded game matches the input's game tag
//! - The input still passes the engine's validation
//! - Replaying `(input, seed)` yields the recorded result, delta and display
//!
//! Errors are collected using the shared `BatchValidationError` pattern, keyed
//! by the 1-based line number.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;
use crate::validation::is_valid_round_id;
use minutecasino_engine::engine;
use minutecasino_engine::logger::RoundRecord;
use std::collections::HashSet;
use std::io::Write;

type VerifyError = BatchValidationError<usize>;

/// Handle the verify command.
///
/// # Returns
///
/// `Ok(())` if every round replays exactly, otherwise an `Err` that maps to
/// exit code `2`.
///
/// # Example
///
/// ```no_run
/// # use std::io;
/// # use minutecasino_cli::commands::handle_verify_command;
/// let input = "data/rounds.jsonl".to_string();
/// let result = handle_verify_command(input, &mut io::stdout(), &mut io::stderr());
/// ```
pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input)?;
    let mut errors: Vec<VerifyError> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut rounds = 0usize;

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        rounds += 1;
        let rec: RoundRecord = parse_record_or_continue!(line, errors, rounds);
        errors.extend(
            check_record(&rec, &mut seen_ids)
                .into_iter()
                .map(|message| VerifyError {
                    item_context: rounds,
                    message,
                }),
        );
    }

    if errors.is_empty() {
        writeln!(out, "Verify: OK (rounds={})", rounds)?;
        return Ok(());
    }

    writeln!(out, "Verify: FAIL (rounds={})", rounds)?;
    writeln!(err)?;
    writeln!(err, "Errors found:")?;
    for error in &errors {
        writeln!(err, "  Round {}: {}", error.item_context, error.message)?;
    }
    writeln!(err)?;
    let invalid: HashSet<usize> = errors.iter().map(|e| e.item_context).collect();
    let percentage = if rounds > 0 {
        (invalid.len() as f64 / rounds as f64 * 100.0).round() as u32
    } else {
        0
    };
    writeln!(
        err,
        "Summary: {} error(s) in {} rounds ({} invalid rounds, {}% invalid)",
        errors.len(),
        rounds,
        invalid.len(),
        percentage
    )?;
    Err(CliError::InvalidInput(format!(
        "{} validation errors found",
        errors.len()
    )))
}

/// Problems found in one record. Empty when it replays exactly.
fn check_record(rec: &RoundRecord, seen_ids: &mut HashSet<String>) -> Vec<String> {
    let mut problems = Vec::new();
    if !is_valid_round_id(&rec.round_id) {
        problems.push(format!("Invalid round id {}", rec.round_id));
    } else if !seen_ids.insert(rec.round_id.clone()) {
        problems.push(format!("Duplicate round id {}", rec.round_id));
    }
    if rec.game != rec.input.kind() {
        problems.push(format!(
            "Game {} does not match input for {}",
            rec.game,
            rec.input.kind()
        ));
        return problems;
    }

    let replay = match engine::play(&rec.input, rec.seed) {
        Ok(o) => o,
        Err(e) => {
            problems.push(format!("Input rejected on replay: {}", e));
            return problems;
        }
    };
    if replay.result != rec.result {
        problems.push(format!(
            "Result mismatch: recorded {}, replayed {}",
            rec.result, replay.result
        ));
    }
    if replay.delta != rec.delta {
        problems.push(format!(
            "Delta mismatch: recorded {}, replayed {}",
            rec.delta, replay.delta
        ));
    }
    if replay.display != rec.display {
        problems.push("Display does not match replay".to_string());
    }
    problems
}
