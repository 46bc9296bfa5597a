// Configuration layering: defaults < file < environment < flags.

use crate::helpers::{clear_env, run_cli};
use minutecasino_engine::logger::RoundRecord;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json = res.json();
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"], "default");
    assert_eq!(json["wager"]["value"], 10);
    assert_eq!(json["difficulty"]["value"], "easy");
    assert_eq!(json["starting_limit"]["value"], 60);
    assert_eq!(json["starting_limit"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("casino.toml");
    fs::write(&path, "seed = 5\nwager = 20\ndifficulty = \"hard\"\n").unwrap();
    unsafe {
        std::env::set_var("MINUTECASINO_CONFIG", &path);
        std::env::set_var("MINUTECASINO_WAGER", "25");
    }

    let res = run_cli(&["cfg"]);
    clear_env();
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let json = res.json();
    assert_eq!(json["seed"]["value"], 5);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["wager"]["value"], 25);
    assert_eq!(json["wager"]["source"], "env");
    assert_eq!(json["difficulty"]["value"], "hard");
    assert_eq!(json["difficulty"]["source"], "file");
}

#[test]
#[serial]
fn flags_override_configured_seed_and_wager() {
    clear_env();
    unsafe {
        std::env::set_var("MINUTECASINO_SEED", "31");
        std::env::set_var("MINUTECASINO_WAGER", "20");
    }
    let configured = run_cli(&["play", "--game", "slots", "--json"]);
    let flagged = run_cli(&["play", "--game", "slots", "--json", "--seed", "8", "--wager", "5"]);
    clear_env();

    assert_eq!(configured.exit_code, 0, "stderr: {}", configured.stderr);
    let rec: RoundRecord = serde_json::from_str(configured.stdout.trim()).unwrap();
    assert_eq!(rec.seed, 31);
    assert_eq!(rec.input.wager(), 20);

    assert_eq!(flagged.exit_code, 0, "stderr: {}", flagged.stderr);
    let rec: RoundRecord = serde_json::from_str(flagged.stdout.trim()).unwrap();
    assert_eq!(rec.seed, 8);
    assert_eq!(rec.input.wager(), 5);
}

#[test]
#[serial]
fn invalid_env_value_is_a_config_error() {
    clear_env();
    unsafe {
        std::env::set_var("MINUTECASINO_STARTING_LIMIT", "0");
    }
    let res = run_cli(&["play", "--game", "slots", "--seed", "1"]);
    clear_env();
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
    assert!(res.stderr.contains("starting_limit"));
}

#[test]
#[serial]
fn malformed_config_file_is_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "wager = \"lots\"\n").unwrap();
    unsafe {
        std::env::set_var("MINUTECASINO_CONFIG", &path);
    }
    let res = run_cli(&["cfg"]);
    clear_env();
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid configuration"));
}
