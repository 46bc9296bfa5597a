//! `cfg`: print the resolved configuration, one `{value, source}` pair per
//! key, where `source` is `default`, `file` or `env`.

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Print the resolved configuration as pretty JSON.
///
/// A config file or variable that fails validation is reported on `err`
/// and returned as `CliError::Config`.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "wager": {
            "value": config.wager,
            "source": sources.wager,
        },
        "difficulty": {
            "value": config.difficulty,
            "source": sources.difficulty,
        },
        "starting_limit": {
            "value": config.starting_limit,
            "source": sources.starting_limit,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
