//! Small control-flow macros shared by `run` and the batch commands.

/// `writeln!` that returns [`crate::exit_code::ERROR`] from the enclosing
/// function when the stream is closed.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or record the failure and continue to the next line.
///
/// Pushes a `BatchValidationError` tagged with `$context` onto `$errors`
/// when the line is not a valid record.
///
/// # Examples
///
/// ```ignore
/// let record: RoundRecord = parse_record_or_continue!(line, errors, line_no);
/// ```
#[macro_export]
macro_rules! parse_record_or_continue {
    ($line:expr, $errors:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                $errors.push($crate::error::BatchValidationError {
                    item_context: $context,
                    message: format!("invalid round record: {}", e),
                });
                continue;
            }
        }
    };
}
