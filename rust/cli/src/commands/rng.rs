//! Random stream inspection command.
//!
//! The `rng` command prints the first draws of one of the engine's seeded
//! streams. Two runs with the same seed and stream print the same values,
//! which makes it a quick check that a recorded seed reproduces.

use crate::cli::Stream;
use crate::error::CliError;
use minutecasino_engine::rng::{Seed, StreamKind};
use std::io::Write;

/// Handle the rng command.
///
/// Uses a random seed when none is given and prints it alongside the draws
/// so the sample can be reproduced.
pub fn handle_rng_command(
    seed: Option<Seed>,
    stream: Stream,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidInput("count must be >= 1".to_string()));
    }
    let s = seed.unwrap_or_else(rand::random);
    let vals = StreamKind::from(stream).sample(s, count);
    writeln!(
        out,
        "RNG sample ({}, seed {}): {:?}",
        stream.as_str(),
        s,
        vals
    )?;
    Ok(())
}
