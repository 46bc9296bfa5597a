//! CLI error type and the batch error record used by `verify`.

use minutecasino_engine::errors::GameError;
use std::fmt;

/// Everything a command can fail with. Each variant maps to exit code 2.
#[derive(Debug)]
pub enum CliError {
    /// stdout/stderr writes and log file I/O
    Io(std::io::Error),

    /// Malformed flags, bet strings, unreadable logs
    InvalidInput(String),

    /// Config file or `MINUTECASINO_*` variables rejected
    Config(String),

    /// An engine refused the round
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::UnknownGame(id) => CliError::InvalidInput(format!("unknown game '{}'", id)),
            other => CliError::Engine(other.to_string()),
        }
    }
}

// io_utils reports failures as strings
impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::InvalidInput(error)
    }
}

/// One failed item in a batch, tagged with whatever identifies it (a line
/// number, a round id).
///
/// ```rust
/// use minutecasino_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 5,
///     message: "delta mismatch".to_string(),
/// };
/// assert_eq!(error.to_string(), "5: delta mismatch");
/// ```
#[derive(Debug)]
pub struct BatchValidationError<T> {
    pub item_context: T,
    pub message: String,
}

impl<T: fmt::Display> fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_errors_map_to_engine_or_input() {
        let e: CliError = GameError::InvalidWager {
            amount: 500,
            min: 5,
            max: 60,
        }
        .into();
        assert!(matches!(e, CliError::Engine(_)));
        assert!(e.to_string().contains("500"));

        let e: CliError = GameError::UnknownGame("poker".into()).into();
        assert!(matches!(e, CliError::InvalidInput(_)));
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;
        let e: CliError = std::io::Error::other("disk full").into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "I/O error: disk full");
    }

    #[test]
    fn batch_error_with_round_id_context() {
        let error = BatchValidationError {
            item_context: "20260101-000003".to_string(),
            message: "result mismatch".to_string(),
        };
        assert_eq!(error.to_string(), "20260101-000003: result mismatch");
    }
}
