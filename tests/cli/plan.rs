use crate::cli::support::{mobiplan, mobiplan_in, stdout_json, LINE_CONFIG};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Plan command tests
// ============================================================================

#[test]
fn test_plan_fastest_human() {
    mobiplan()
        .args(["plan", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: A (Downtown) -> C (Midtown) -> E (TechPark)",
        ))
        .stdout(predicate::str::contains("Distance: 11 (2 hops)"))
        .stdout(predicate::str::contains("Suggested modes (fastest):"))
        .stdout(predicate::str::contains("Recommended: Metro"));
}

#[test]
fn test_plan_cheapest_human() {
    mobiplan()
        .args(["plan", "A", "E", "--preference", "cheapest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested modes (cheapest):"))
        .stdout(predicate::str::contains("Recommended: EV Bike"));
}

#[test]
fn test_plan_quiet() {
    mobiplan()
        .args(["-q", "plan", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested modes").not())
        .stdout(predicate::str::contains("Recommended:").not())
        .stdout(predicate::str::contains("1. Metro"));
}

#[test]
fn test_plan_json() {
    let output = mobiplan()
        .args(["--format", "json", "plan", "A", "E"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["from"], "A");
    assert_eq!(json["to"], "E");
    assert_eq!(json["preference"], "fastest");
    assert_eq!(json["distance"], 11.0);
    assert_eq!(json["recommended"], "metro");
    assert_eq!(json["route"]["path"], serde_json::json!(["A", "C", "E"]));
    assert_eq!(json["proposals"].as_array().unwrap().len(), 4);
    assert!(json["planned_at"].as_str().is_some_and(|s| s.contains('T')));
}

#[test]
fn test_plan_records() {
    mobiplan()
        .args(["--format", "records", "plan", "A", "E", "-p", "cheapest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command=plan from=A to=E preference=cheapest"))
        .stdout(predicate::str::contains(
            "R A E found=true distance=11 hops=2 path=A,C,E",
        ))
        .stdout(predicate::str::contains("M 1 ev \"EV Bike\""));
}

#[test]
fn test_plan_unknown_endpoint() {
    mobiplan()
        .args(["plan", "A", "Nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: Nowhere"));
}

#[test]
fn test_plan_disconnected_ranks_zero_distance() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), LINE_CONFIG).unwrap();

    mobiplan_in(dir.path())
        .args(["plan", "X", "W"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from X to W"))
        .stdout(predicate::str::contains("Ranking modes for distance 0"))
        .stderr(predicate::str::contains("no route between endpoints"));

    let output = mobiplan_in(dir.path())
        .args(["--format", "json", "plan", "X", "W"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["distance"], 0.0);
    assert_eq!(json["route"]["found"], false);
}

#[test]
fn test_plan_custom_catalog() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), LINE_CONFIG).unwrap();

    mobiplan_in(dir.path())
        .args(["plan", "X", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended: Taxi"));

    mobiplan_in(dir.path())
        .args(["plan", "X", "Z", "-p", "cheapest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended: Walk"));
}

#[test]
fn test_plan_custom_scoring_weights() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.toml");
    // Time carries no weight under "fastest", so only cost decides
    std::fs::write(
        &path,
        "[scoring]\npreferred_weight = 0.0\nsecondary_weight = 1.0\n",
    )
    .unwrap();

    mobiplan()
        .arg("--config")
        .arg(&path)
        .args(["plan", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended: EV Bike"));
}
