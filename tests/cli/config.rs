use crate::cli::support::{mobiplan, mobiplan_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_uses_config_dir_env() {
    let dir = tempdir().unwrap();
    let expected = dir.path().join("config.toml");

    let output = mobiplan_in(dir.path())
        .args(["--format", "json", "config", "path"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["path"], expected.display().to_string());
    assert_eq!(json["exists"], false);
}

#[test]
fn test_config_show_builtin_defaults() {
    mobiplan()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# built-in defaults"))
        .stdout(predicate::str::contains("[scoring]"))
        .stdout(predicate::str::contains("preferred_weight = 0.7"))
        .stdout(predicate::str::contains("TechPark"));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    mobiplan_in(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(path.exists());

    let output = mobiplan_in(dir.path())
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["source"], path.display().to_string());
    assert_eq!(json["config"]["modes"].as_array().unwrap().len(), 4);

    // The written city routes the same as the built-in one
    mobiplan_in(dir.path())
        .args(["route", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Distance: 11 (2 hops)"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "version = 1\n").unwrap();

    mobiplan_in(dir.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    mobiplan_in(dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempdir().unwrap();
    mobiplan()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("nodes")
        .assert()
        .code(1);
}

#[test]
fn test_config_env_var_selects_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("city.toml");
    std::fs::write(
        &path,
        "[[nodes]]\nid = \"P\"\n\n[[nodes]]\nid = \"Q\"\n\n[[edges]]\nfrom = \"P\"\nto = \"Q\"\ndistance = 3.0\n",
    )
    .unwrap();

    mobiplan()
        .env("MOBIPLAN_CONFIG", &path)
        .args(["route", "P", "Q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: P -> Q"))
        .stdout(predicate::str::contains("Distance: 3 (1 hop)"));
}

#[test]
fn test_invalid_graph_in_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[[nodes]]\nid = \"P\"\n\n[[edges]]\nfrom = \"P\"\nto = \"Q\"\ndistance = 1.0\n",
    )
    .unwrap();

    mobiplan_in(dir.path()).arg("nodes").assert().code(3);
}

#[test]
fn test_malformed_config_toml() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[[nodes]\nid = ").unwrap();

    mobiplan_in(dir.path()).arg("nodes").assert().code(1);
}

#[test]
fn test_config_rejects_ids_with_spaces() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[[nodes]]\nid = \"Down Town\"\n",
    )
    .unwrap();

    mobiplan_in(dir.path())
        .args(["--format", "json", "nodes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_graph\""));
}

#[test]
fn test_config_rejects_overflowing_edge_weights() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[[nodes]]
id = "A"

[[nodes]]
id = "B"

[[nodes]]
id = "C"

[[edges]]
from = "A"
to = "B"
distance = 1.7976931348623157e308

[[edges]]
from = "B"
to = "C"
distance = 1.7976931348623157e308
"#,
    )
    .unwrap();

    mobiplan_in(dir.path())
        .args(["route", "A", "C"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("overflows the total graph distance"));
}
