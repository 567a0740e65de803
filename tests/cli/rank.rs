use crate::cli::support::{mobiplan, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Rank command tests
// ============================================================================

fn ranked_ids(json: &serde_json::Value) -> Vec<String> {
    json["proposals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["mode"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_rank_fastest_human() {
    mobiplan()
        .args(["rank", "--distance", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modes for distance 11 (fastest):"))
        .stdout(predicate::str::is_match(r" 1\. Metro\s+11 min").unwrap())
        .stdout(predicate::str::contains("score 0.293"));
}

#[test]
fn test_rank_quiet_omits_heading() {
    mobiplan()
        .args(["--quiet", "rank", "-d", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modes for distance").not())
        .stdout(predicate::str::contains("1. Metro"));
}

#[test]
fn test_rank_fastest_order() {
    let output = mobiplan()
        .args(["--format", "json", "rank", "-d", "11"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["preference"], "fastest");
    assert_eq!(json["distance"], 11.0);
    assert_eq!(ranked_ids(&json), vec!["metro", "ev", "drone", "hyperloop"]);
    assert_eq!(json["proposals"][0]["rank"], 1);
    assert_eq!(json["proposals"][0]["time_minutes"], 11);
}

#[test]
fn test_rank_cheapest_order() {
    let output = mobiplan()
        .args(["--format", "json", "rank", "-d", "11", "-p", "cheapest"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["preference"], "cheapest");
    assert_eq!(ranked_ids(&json), vec!["ev", "metro", "drone", "hyperloop"]);
}

#[test]
fn test_rank_scores_ascending() {
    let output = mobiplan()
        .args(["--format", "json", "rank", "-d", "37.5"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let scores: Vec<f64> = json["proposals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["score"].as_f64().unwrap())
        .collect();
    assert_eq!(scores.len(), 4);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_rank_zero_distance_keeps_catalog_order() {
    let output = mobiplan()
        .args(["--format", "json", "rank", "-d", "0"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(ranked_ids(&json), vec!["metro", "ev", "drone", "hyperloop"]);
    assert!(json["proposals"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["score"].as_f64() == Some(0.0)));
}

#[test]
fn test_rank_records() {
    mobiplan()
        .args(["--format", "records", "rank", "-d", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "command=rank distance=11 preference=fastest",
        ))
        .stdout(predicate::str::contains(
            "M 1 metro \"Metro\" time_min=11 cost=5.50 score=0.293",
        ));
}

#[test]
fn test_rank_preference_case_insensitive() {
    mobiplan()
        .args(["rank", "-d", "11", "-p", "CHEAPEST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(cheapest)"));
}

#[test]
fn test_rank_invalid_preference() {
    mobiplan()
        .args(["rank", "-d", "11", "-p", "scenic"])
        .assert()
        .code(2);
}

#[test]
fn test_rank_invalid_preference_json() {
    mobiplan()
        .args(["--format", "json", "rank", "-d", "11", "-p", "scenic"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_rank_negative_distance() {
    mobiplan().args(["rank", "-d", "-4"]).assert().code(2);
}

#[test]
fn test_rank_requires_distance() {
    mobiplan().arg("rank").assert().code(2);
}
