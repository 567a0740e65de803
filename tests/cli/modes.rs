use crate::cli::support::{mobiplan, mobiplan_in, stdout_json, LINE_CONFIG};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_modes_human_lists_builtin_catalog() {
    mobiplan()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("metro"))
        .stdout(predicate::str::contains("EV Bike"))
        .stdout(predicate::str::contains("Drone"))
        .stdout(predicate::str::contains("Hyperloop"));
}

#[test]
fn test_modes_json() {
    let output = mobiplan()
        .args(["--format", "json", "modes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let modes = json.as_array().unwrap();
    assert_eq!(modes.len(), 4);
    assert_eq!(modes[3]["id"], "hyperloop");
    assert_eq!(modes[3]["speed"], 300.0);
    assert_eq!(modes[1]["cost_per_distance"], 0.2);
}

#[test]
fn test_modes_records() {
    mobiplan()
        .args(["--format", "records", "modes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command=modes count=4"))
        .stdout(predicate::str::contains(
            "M ev \"EV Bike\" speed=20 cost_per_distance=0.2",
        ));
}

#[test]
fn test_modes_custom_catalog() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), LINE_CONFIG).unwrap();

    mobiplan_in(dir.path())
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Taxi"))
        .stdout(predicate::str::contains("Metro").not());
}

#[test]
fn test_invalid_mode_in_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[[modes]]\nid = \"teleport\"\nspeed = 0.0\ncost_per_distance = 1.0\n",
    )
    .unwrap();

    mobiplan_in(dir.path())
        .args(["--format", "json", "modes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_mode\""));
}
