//! Shared helpers for the integration suite.
//!
//! `run_cli` drives the library entry point in-process with captured output
//! buffers. `clear_env` removes every `MINUTECASINO_*` variable so a test
//! starts from built-in defaults; callers hold the `#[serial]` lock.

use serde_json::Value;

pub const COMMANDS: &[&str] = &[
    "play", "problems", "grade", "sim", "stats", "verify", "rng", "cfg",
];

const ENV_VARS: &[&str] = &[
    "MINUTECASINO_CONFIG",
    "MINUTECASINO_SEED",
    "MINUTECASINO_WAGER",
    "MINUTECASINO_DIFFICULTY",
    "MINUTECASINO_STARTING_LIMIT",
];

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    #[allow(dead_code)]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON: {}\n{}", e, self.stdout))
    }
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("minutecasino").chain(args.iter().copied());
    let exit_code = minutecasino_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("stdout utf8"),
        stderr: String::from_utf8(err).expect("stderr utf8"),
    }
}

pub fn clear_env() {
    for var in ENV_VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

#[allow(dead_code)]
pub fn assert_jsonl_format(content: &str) {
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        serde_json::from_str::<Value>(line)
            .unwrap_or_else(|e| panic!("invalid JSON at line {}: {}\n{}", i + 1, e, line));
    }
}
