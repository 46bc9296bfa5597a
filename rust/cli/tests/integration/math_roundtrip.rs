// problems -> grade: a batch printed for a seed is graded against the same seed.

use crate::helpers::{clear_env, run_cli};
use minutecasino_engine::logger::RoundRecord;
use minutecasino_engine::math_challenge::{Difficulty, problem_batch};
use minutecasino_engine::outcome::ResultClass;
use serial_test::serial;

#[test]
#[serial]
fn problems_json_hides_answers_and_is_reproducible() {
    clear_env();
    let a = run_cli(&["problems", "--difficulty", "medium", "--seed", "5", "--json"]);
    let b = run_cli(&["problems", "--difficulty", "medium", "--seed", "5", "--json"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);

    let json = a.json();
    assert_eq!(json["seed"], 5);
    assert_eq!(json["difficulty"], "medium");
    let problems = json["problems"].as_array().unwrap();
    assert_eq!(problems.len(), Difficulty::Medium.problem_count());
    for p in problems {
        assert!(p.get("answer").is_none());
        assert_eq!(p["options"].as_array().unwrap().len(), 4);
        assert_eq!(p["time_limit"], 8);
    }

    let batch = problem_batch(Difficulty::Medium, 5);
    for (listed, generated) in problems.iter().zip(&batch) {
        assert_eq!(listed["question"], generated.question.as_str());
    }
}

#[test]
#[serial]
fn problems_text_lists_numbered_questions() {
    clear_env();
    let res = run_cli(&["problems", "--difficulty", "hard", "--seed", "11"]);
    assert_eq!(res.exit_code, 0);
    let mut lines = res.stdout.lines();
    assert_eq!(lines.next(), Some("Seed: 11 (hard)"));
    assert!(lines.next().unwrap().starts_with("1. "));
    assert_eq!(res.stdout.lines().count(), 1 + 3);
}

#[test]
#[serial]
fn grading_correct_fast_answers_wins_double() {
    clear_env();
    let batch = problem_batch(Difficulty::Easy, 5);
    let answers: Vec<String> = batch.iter().map(|p| p.answer.to_string()).collect();
    let mut args = vec![
        "grade",
        "--difficulty",
        "easy",
        "--seed",
        "5",
        "--wager",
        "10",
        "--json",
    ];
    for a in &answers {
        args.push("--answer");
        args.push(a);
        args.push("--time");
        args.push("1");
    }
    let res = run_cli(&args);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stderr.is_empty());
    let rec: RoundRecord = serde_json::from_str(res.stdout.trim()).unwrap();
    assert_eq!(rec.result, ResultClass::Win);
    // accuracy 1.0 times the 2.0 speed cap
    assert_eq!(rec.delta, 20);
}

#[test]
#[serial]
fn grading_without_answers_loses_half_and_warns() {
    clear_env();
    let res = run_cli(&[
        "grade",
        "--difficulty",
        "easy",
        "--seed",
        "5",
        "--wager",
        "10",
    ]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("0 answer(s) given"));
    assert!(
        res.stdout
            .starts_with("math-challenge seed=5 result=loss delta=-5 min")
    );
}

#[test]
#[serial]
fn grading_rejects_negative_time() {
    clear_env();
    let res = run_cli(&["grade", "--seed", "5", "--answer", "1", "--time", "-2"]);
    assert_eq!(res.exit_code, 2);
}
