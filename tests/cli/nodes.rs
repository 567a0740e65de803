use crate::cli::support::{mobiplan, mobiplan_in, stdout_json, LINE_CONFIG};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_nodes_human() {
    mobiplan()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes (5):"))
        .stdout(predicate::str::contains("  E  TechPark"))
        .stdout(predicate::str::contains("Edges (6):"))
        .stdout(predicate::str::contains("  C - E  7"));
}

#[test]
fn test_nodes_json() {
    let output = mobiplan()
        .args(["--format", "json", "nodes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let ids: Vec<&str> = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["A", "B", "C", "D", "E"]);
    assert_eq!(json["edges"].as_array().unwrap().len(), 6);
}

#[test]
fn test_nodes_records() {
    mobiplan()
        .args(["--format", "records", "nodes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command=nodes nodes=5 edges=6"))
        .stdout(predicate::str::contains("N A \"Downtown\""))
        .stdout(predicate::str::contains("E D E distance=4"));
}

#[test]
fn test_nodes_custom_graph() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), LINE_CONFIG).unwrap();

    mobiplan_in(dir.path())
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes (4):"))
        .stdout(predicate::str::contains("  W  Island"))
        .stdout(predicate::str::contains("  X - Y  2.50"));
}
