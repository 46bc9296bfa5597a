//! Command handler modules for the minutecasino CLI.
//!
//! Each subcommand lives in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod grade;
mod play;
mod problems;
mod rng;
mod sim;
mod stats;
mod verify;

pub use cfg::handle_cfg_command;
pub use grade::{handle_grade_command, GradeArgs};
pub use play::{handle_play_command, PlayArgs};
pub use problems::handle_problems_command;
pub use rng::handle_rng_command;
pub use sim::{handle_sim_command, SimArgs};
pub use stats::handle_stats_command;
pub use verify::handle_verify_command;

use chrono::Utc;
use minutecasino_engine::rng::Seed;

/// Seed for an interactive round: the explicit flag, then configuration,
/// then the current time in milliseconds.
pub(crate) fn resolve_seed(flag: Option<Seed>, configured: Option<Seed>) -> Seed {
    flag.or(configured)
        .unwrap_or_else(|| Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_wins_over_config() {
        assert_eq!(resolve_seed(Some(3), Some(9)), 3);
        assert_eq!(resolve_seed(None, Some(9)), 9);
    }

    #[test]
    fn missing_seed_falls_back_to_clock() {
        let before = Utc::now().timestamp_millis();
        let s = resolve_seed(None, None);
        assert!(s >= before);
    }
}
