//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages and warnings.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Warn that a flag was given for a game that does not read it
pub fn warn_parameter_unused(
    err: &mut dyn Write,
    param_name: &str,
    game: &str,
) -> std::io::Result<()> {
    writeln!(
        err,
        "WARNING: Parameter --{} is not used by {}.",
        param_name, game
    )
}

/// Sign-prefixed minute delta, e.g. `+15 min` or `-10 min`
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{} min", delta)
    } else {
        format!("{} min", delta)
    }
}
