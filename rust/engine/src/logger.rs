use serde::{Deserialize, Serialize};

use crate::engine::{GameDisplay, GameInput};
use crate::game::GameKind;
use crate::outcome::{Outcome, ResultClass};
use crate::rng::Seed;

/// One settled round, serialized as a single JSONL line.
///
/// Carries everything needed to replay the round: the game, its input and the
/// seed. `result`, `delta` and `display` are what the engine produced at the
/// time and can be compared against a fresh replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    pub game: GameKind,
    pub seed: Seed,
    pub input: GameInput,
    pub result: ResultClass,
    pub delta: i64,
    pub display: GameDisplay,
    /// Timestamp when the round was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn new(
        round_id: String,
        seed: Seed,
        input: GameInput,
        outcome: Outcome<GameDisplay>,
    ) -> Self {
        Self {
            round_id,
            game: input.kind(),
            seed,
            input,
            result: outcome.result,
            delta: outcome.delta,
            display: outcome.display,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends round records to a JSONL sink and hands out sequential round ids.
pub struct RoundLogger {
    writer: Option<BufWriter<Box<dyn Write>>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self::from_writer(Box::new(f)))
    }

    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer: Some(BufWriter::new(writer)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    /// A logger that only numbers rounds and writes nothing.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
