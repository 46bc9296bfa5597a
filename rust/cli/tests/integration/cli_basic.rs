// Basic CLI surface: help, version, argument errors, rng.

use crate::helpers::{COMMANDS, clear_env, run_cli};
use serial_test::serial;

#[test]
#[serial]
fn help_lists_all_commands() {
    let res = run_cli(&["--help"]);
    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in COMMANDS {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
#[serial]
fn version_prints_and_exits_zero() {
    let res = run_cli(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("minutecasino"));
}

#[test]
#[serial]
fn unknown_subcommand_shows_command_list_on_stderr() {
    let res = run_cli(&["deal"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Usage: minutecasino <command> [options]"));
    for cmd in COMMANDS {
        assert!(res.stderr.contains(&format!("  {}", cmd)));
    }
}

#[test]
#[serial]
fn unknown_game_id_is_rejected() {
    let res = run_cli(&["play", "--game", "poker"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("poker"));
}

#[test]
#[serial]
fn rng_is_reproducible_for_a_seed() {
    clear_env();
    let a = run_cli(&["rng", "--seed", "42", "--count", "3"]);
    let b = run_cli(&["rng", "--seed", "42", "--count", "3"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.starts_with("RNG sample (park-miller, seed 42): ["));

    let mixed = run_cli(&["rng", "--seed", "42", "--stream", "mixed", "--count", "3"]);
    assert_eq!(mixed.exit_code, 0);
    assert!(mixed.stdout.contains("mixed"));
    assert_ne!(a.stdout, mixed.stdout);
}

#[test]
#[serial]
fn rng_rejects_zero_count() {
    let res = run_cli(&["rng", "--seed", "1", "--count", "0"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("count must be >= 1"));
}
