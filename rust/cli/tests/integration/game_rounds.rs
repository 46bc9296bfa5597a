// One-round play through the CLI for every game.

use crate::helpers::{clear_env, run_cli};
use minutecasino_engine::engine::GameDisplay;
use minutecasino_engine::logger::RoundRecord;
use serial_test::serial;

fn play_json(args: &[&str]) -> RoundRecord {
    let mut full = vec!["play", "--json"];
    full.extend_from_slice(args);
    let res = run_cli(&full);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(res.stdout.trim()).expect("round record")
}

#[test]
#[serial]
fn every_game_plays_with_defaults() {
    clear_env();
    let cases: &[&[&str]] = &[
        &["--game", "slots"],
        &["--game", "blackjack"],
        &["--game", "roulette", "--bet", "odd:10"],
        &["--game", "plinko"],
        &["--game", "pai-gow", "--wager", "20"],
        &["--game", "math-challenge", "--answer", "1", "--answer", "2"],
        &["--game", "jewel-mining", "--click", "0", "--click", "5"],
    ];
    for args in cases {
        let mut with_seed = args.to_vec();
        with_seed.extend_from_slice(&["--seed", "2024"]);
        let rec = play_json(&with_seed);
        assert_eq!(rec.game, rec.input.kind());
        assert_eq!(rec.display.kind(), rec.game);
        assert_eq!(rec.seed, 2024);
        assert!(rec.ts.is_some());
        assert!(rec.round_id.ends_with("-000001"));
    }
}

#[test]
#[serial]
fn same_seed_same_round() {
    clear_env();
    for game in ["slots", "blackjack", "plinko", "pai-gow"] {
        let a = play_json(&["--game", game, "--seed", "77", "--wager", "15"]);
        let b = play_json(&["--game", game, "--seed", "77", "--wager", "15"]);
        assert_eq!(a.result, b.result);
        assert_eq!(a.delta, b.delta);
        assert_eq!(a.display, b.display);
    }
}

#[test]
#[serial]
fn roulette_red_seven_scenario() {
    clear_env();
    let rec = play_json(&[
        "--game",
        "roulette",
        "--seed",
        "24174",
        "--bet",
        "red:10",
        "--bet",
        "single:7:5",
    ]);
    assert_eq!(rec.delta, 200);
    match rec.display {
        GameDisplay::Roulette(d) => {
            assert_eq!(d.winning_number, 7);
            assert_eq!(d.winning_bets.len(), 2);
            assert!(d.losing_bets.is_empty());
        }
        other => panic!("unexpected display {:?}", other),
    }

    let text = run_cli(&[
        "play",
        "--game",
        "roulette",
        "--seed",
        "24174",
        "--bet",
        "red:10",
        "--bet",
        "single:7:5",
    ]);
    assert_eq!(text.exit_code, 0);
    assert!(
        text.stdout
            .starts_with("roulette seed=24174 result=win delta=+200 min")
    );
}

#[test]
#[serial]
fn wager_out_of_range_is_an_engine_error() {
    clear_env();
    let res = run_cli(&["play", "--game", "slots", "--wager", "1000", "--seed", "1"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Invalid wager: 1000"));
}

#[test]
#[serial]
fn malformed_bet_is_invalid_input() {
    clear_env();
    let res = run_cli(&["play", "--game", "roulette", "--bet", "blue:5"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Unrecognized bet"));
}

#[test]
#[serial]
fn roulette_without_bets_is_rejected() {
    clear_env();
    let res = run_cli(&["play", "--game", "roulette", "--seed", "3"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid bet set"));
}

#[test]
#[serial]
fn unused_flags_warn_but_still_play() {
    clear_env();
    let res = run_cli(&["play", "--game", "slots", "--seed", "9", "--click", "3"]);
    assert_eq!(res.exit_code, 0);
    assert!(
        res.stderr
            .contains("WARNING: Parameter --click is not used by slots.")
    );
    assert!(res.stdout.starts_with("slots seed=9 result="));
}

#[test]
#[serial]
fn repeated_jewel_click_is_rejected() {
    clear_env();
    let res = run_cli(&[
        "play",
        "--game",
        "jewel-mining",
        "--seed",
        "4",
        "--click",
        "2",
        "--click",
        "2",
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid input"));
}
