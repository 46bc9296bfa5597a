// sim -> stats -> verify over recorded round logs.

use crate::helpers::{assert_jsonl_format, clear_env, run_cli};
use minutecasino_cli::io_utils::read_text_auto;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn sim_is_reproducible_from_base_seed() {
    clear_env();
    let args = [
        "sim",
        "--game",
        "slots",
        "--rounds",
        "25",
        "--seed",
        "99",
        "--starting-limit",
        "720",
    ];
    let a = run_cli(&args);
    let b = run_cli(&args);
    assert_eq!(a.exit_code, 0, "stderr: {}", a.stderr);
    assert_eq!(a.stdout, b.stdout);
    let json = a.json();
    assert_eq!(json["game"], "slots");
    assert_eq!(json["base_seed"], 99);
    assert_eq!(json["rounds"], 25);
    assert_eq!(json["tally"]["games_played"], 25);
}

#[test]
#[serial]
fn recorded_rounds_feed_stats_and_verify() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("blackjack.jsonl");
    let path_str = path.to_str().unwrap();

    let sim = run_cli(&[
        "sim",
        "--game",
        "blackjack",
        "--rounds",
        "40",
        "--seed",
        "7",
        "--starting-limit",
        "720",
        "--output",
        path_str,
    ]);
    assert_eq!(sim.exit_code, 0, "stderr: {}", sim.stderr);
    let played = sim.json()["rounds"].as_u64().unwrap();
    assert!(played > 0);

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\r'));
    assert_jsonl_format(&content);
    assert_eq!(content.lines().count() as u64, played);

    let stats = run_cli(&["stats", "--input", path_str]);
    assert_eq!(stats.exit_code, 0, "stderr: {}", stats.stderr);
    let s = stats.json();
    assert_eq!(s["rounds"].as_u64(), Some(played));
    assert_eq!(s["games"]["blackjack"]["games_played"].as_u64(), Some(played));
    assert_eq!(s["overall"]["net_delta"], sim.json()["tally"]["net_delta"]);

    let verify = run_cli(&["verify", "--input", path_str]);
    assert_eq!(verify.exit_code, 0, "stderr: {}", verify.stderr);
    assert_eq!(verify.stdout.trim(), format!("Verify: OK (rounds={})", played));
}

#[test]
#[serial]
fn compressed_logs_round_trip() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jewels.jsonl.zst");
    let path_str = path.to_str().unwrap();

    let sim = run_cli(&[
        "sim",
        "--game",
        "jewel-mining",
        "--rounds",
        "15",
        "--seed",
        "3",
        "--starting-limit",
        "720",
        "--output",
        path_str,
    ]);
    assert_eq!(sim.exit_code, 0, "stderr: {}", sim.stderr);
    let raw = fs::read(&path).unwrap();
    assert_eq!(&raw[..4], &[0x28, 0xB5, 0x2F, 0xFD]);
    let text = read_text_auto(path_str).unwrap();
    assert_jsonl_format(&text);

    let verify = run_cli(&["verify", "--input", path_str]);
    assert_eq!(verify.exit_code, 0, "stderr: {}", verify.stderr);

    // directory input picks up the compressed file
    let stats = run_cli(&["stats", "--input", dir.path().to_str().unwrap()]);
    assert_eq!(stats.exit_code, 0);
    assert_eq!(stats.json()["rounds"], sim.json()["rounds"]);
}

#[test]
#[serial]
fn verify_catches_tampered_delta() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plinko.jsonl");
    let path_str = path.to_str().unwrap();
    let sim = run_cli(&[
        "sim",
        "--game",
        "plinko",
        "--rounds",
        "5",
        "--seed",
        "12",
        "--starting-limit",
        "720",
        "--output",
        path_str,
    ]);
    assert_eq!(sim.exit_code, 0, "stderr: {}", sim.stderr);

    let content = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let old = lines[1]["delta"].as_i64().unwrap();
    lines[1]["delta"] = serde_json::json!(old + 1000);
    let rewritten: String = lines.iter().map(|v| format!("{}\n", v)).collect();
    fs::write(&path, rewritten).unwrap();

    let verify = run_cli(&["verify", "--input", path_str]);
    assert_eq!(verify.exit_code, 2);
    assert!(verify.stdout.contains("Verify: FAIL (rounds=5)"));
    assert!(verify.stderr.contains("Round 2: Delta mismatch"));
}

#[test]
#[serial]
fn sim_stops_when_balance_cannot_cover_stake() {
    clear_env();
    let res = run_cli(&[
        "sim",
        "--game",
        "slots",
        "--rounds",
        "500",
        "--wager",
        "60",
        "--seed",
        "1",
        "--starting-limit",
        "30",
    ]);
    assert_eq!(res.exit_code, 0);
    let json = res.json();
    assert_eq!(json["rounds"], 0);
    assert_eq!(json["final_limit"], 30);
    assert!(res.stderr.contains("stopped after 0 round(s)"));
}

#[test]
#[serial]
fn negative_configured_seed_uses_its_magnitude() {
    clear_env();
    unsafe {
        std::env::set_var("MINUTECASINO_SEED", "-42");
    }
    let from_env = run_cli(&["sim", "--game", "slots", "--rounds", "5"]);
    clear_env();
    let flagged = run_cli(&["sim", "--game", "slots", "--rounds", "5", "--seed", "42"]);

    assert_eq!(from_env.exit_code, 0, "stderr: {}", from_env.stderr);
    assert_eq!(from_env.json()["base_seed"], 42);
    assert_eq!(from_env.stdout, flagged.stdout);
}

#[test]
#[serial]
fn sim_clamps_starting_limit() {
    clear_env();
    let res = run_cli(&[
        "sim",
        "--game",
        "plinko",
        "--rounds",
        "1",
        "--seed",
        "1",
        "--starting-limit",
        "5000",
    ]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("starting limit 5000 clamped to 720"));
    let final_limit = res.json()["final_limit"].as_i64().unwrap();
    assert!((1..=720).contains(&final_limit));
}

#[test]
#[serial]
fn sim_rejects_invalid_wager_before_playing() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.jsonl");
    let res = run_cli(&[
        "sim",
        "--game",
        "pai-gow",
        "--rounds",
        "3",
        "--wager",
        "5",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid wager: 5"));
    assert!(!path.exists());
}

#[test]
#[serial]
fn stats_flags_sign_mismatch() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.jsonl");
    let sim = run_cli(&[
        "sim",
        "--game",
        "slots",
        "--rounds",
        "1",
        "--seed",
        "5",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(sim.exit_code, 0);
    let mut rec: serde_json::Value =
        serde_json::from_str(fs::read_to_string(&path).unwrap().trim()).unwrap();
    rec["result"] = serde_json::json!("push");
    rec["delta"] = serde_json::json!(12);
    fs::write(&path, format!("{}\n", rec)).unwrap();

    let stats = run_cli(&["stats", "--input", path.to_str().unwrap()]);
    assert_eq!(stats.exit_code, 2);
    assert!(stats.stderr.contains("disagrees with delta"));
}
