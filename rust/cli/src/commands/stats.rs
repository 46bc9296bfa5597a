//! Statistics aggregation over round logs.
//!
//! Reads JSONL round logs (plain or `.jsonl.zst`, a single file or a
//! directory tree) and folds them into per-game and overall tallies. A record
//! whose result class disagrees with the sign of its delta fails the run.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use minutecasino_engine::game::GameKind;
use minutecasino_engine::limits::DailyTally;
use minutecasino_engine::logger::RoundRecord;
use minutecasino_engine::outcome::ResultClass;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Aggregates statistics from round logs.
///
/// # Arguments
///
/// * `input` - Path to a JSONL file or a directory containing round logs
/// * `out` - Output stream for the JSON report
/// * `err` - Output stream for warnings about skipped records
///
/// # Returns
///
/// `Ok(())` when every record is consistent, otherwise an `Err` that maps to
/// exit code `2`. The report is printed either way.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    run_stats(&input, out, err)
}

#[derive(Default)]
struct StatsState {
    overall: DailyTally,
    games: BTreeMap<GameKind, DailyTally>,
    skipped: u64,
    corrupted: u64,
    stats_ok: bool,
}

fn consume_stats_content(
    content: String,
    state: &mut StatsState,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    for (i, line) in lines.iter().enumerate() {
        let rec: RoundRecord = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(_) => {
                // a torn final line is what an interrupted writer leaves behind
                if i == lines.len() - 1 && !has_trailing_nl {
                    state.skipped += 1;
                } else {
                    state.corrupted += 1;
                }
                continue;
            }
        };

        if rec.result != ResultClass::from_delta(rec.delta) {
            state.stats_ok = false;
            ui::write_error(
                err,
                &format!(
                    "Result {} disagrees with delta {} at round {}",
                    rec.result, rec.delta, rec.round_id
                ),
            )?;
            continue;
        }

        state.overall.record(rec.result, rec.delta);
        state
            .games
            .entry(rec.game)
            .or_default()
            .record(rec.result, rec.delta);
    }
    Ok(())
}

fn run_stats(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let path = Path::new(input);
    let mut state = StatsState {
        stats_ok: true,
        ..StatsState::default()
    };

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
                {
                    match read_text_auto(&p.to_string_lossy()) {
                        Ok(content) => consume_stats_content(content, &mut state, err)?,
                        Err(_) => state.corrupted += 1,
                    }
                }
            }
        }
    } else {
        match read_text_auto(input) {
            Ok(s) => consume_stats_content(s, &mut state, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::Config(format!("Failed to read {}: {}", input, e)));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::write_error(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    let rounds = state.overall.games_played;
    if !path.is_dir() && rounds == 0 && (state.corrupted > 0 || state.skipped > 0) {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let summary = serde_json::json!({
        "rounds": rounds,
        "overall": state.overall,
        "win_rate": state.overall.win_rate(),
        "games": state.games,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    if state.stats_ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Statistics validation failed".to_string(),
        ))
    }
}
