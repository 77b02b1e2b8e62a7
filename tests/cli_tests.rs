//! Command-line integration tests
//!
//! Each test runs the binary against its own data directory.

use assert_cmd::Command;
use chrono::{Local, Months};
use predicates::prelude::*;
use tempfile::TempDir;

fn horizon(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("horizon").unwrap();
    cmd.env("HORIZON_CLI_DATA_DIR", dir.path());
    cmd
}

/// Initialized data directory with one month of salary and rent recorded today
fn seeded() -> TempDir {
    let dir = TempDir::new().unwrap();
    horizon(&dir).arg("init").assert().success();
    horizon(&dir)
        .args(["account", "create", "Checking", "-b", "0"])
        .assert()
        .success();
    horizon(&dir)
        .args(["txn", "add", "Checking", "1000", "--kind", "income", "--category", "Salary"])
        .assert()
        .success();
    horizon(&dir)
        .args(["txn", "add", "Checking", "600", "--kind", "expense", "--category", "Housing"])
        .assert()
        .success();
    dir
}

#[test]
fn init_seeds_base_scenario() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    horizon(&dir)
        .args(["scenario", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base"));

    horizon(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    horizon(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Baseline months"));
}

#[test]
fn baseline_reflects_recorded_history() {
    let dir = seeded();
    horizon(&dir)
        .args(["project", "baseline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn scenario_with_behavior_projects() {
    let dir = seeded();
    horizon(&dir)
        .args(["scenario", "create", "Frugal", "-y", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created scenario: Frugal"));

    horizon(&dir)
        .args([
            "behavior", "add", "Frugal", "--target", "expense", "--category", "Housing",
            "--mode", "percentage", "--percent", "-20",
        ])
        .assert()
        .success();

    horizon(&dir)
        .args(["behavior", "list", "Frugal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Housing"));

    horizon(&dir)
        .args(["project", "show", "Frugal", "--monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection: Frugal"));
}

#[test]
fn invalid_behavior_is_rejected() {
    let dir = seeded();
    horizon(&dir)
        .args(["behavior", "add", "Base", "--target", "expense", "--category", "Housing"])
        .assert()
        .failure();

    horizon(&dir)
        .args([
            "behavior", "add", "Base", "--target", "expense", "--mode", "percentage",
            "--percent", "-150",
        ])
        .assert()
        .failure();
}

#[test]
fn goals_are_checked_against_projection() {
    let dir = seeded();
    let target = Local::now()
        .date_naive()
        .checked_add_months(Months::new(6))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string();

    horizon(&dir)
        .args(["goal", "add", "Base", "Yacht", "--amount", "1000000", "--date", target.as_str()])
        .assert()
        .success();

    horizon(&dir)
        .args(["project", "goals", "Base"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Yacht"))
        .stdout(predicate::str::contains("infeasible"));
}

#[test]
fn goal_in_the_past_is_rejected() {
    let dir = seeded();
    horizon(&dir)
        .args(["goal", "add", "Base", "Late", "--amount", "100", "--date", "2000-01-01"])
        .assert()
        .failure();
}

#[test]
fn compare_requires_two_or_three() {
    let dir = seeded();
    horizon(&dir)
        .args(["scenario", "duplicate", "Base", "--name", "Copy"])
        .assert()
        .success();

    horizon(&dir)
        .args(["project", "compare", "Base"])
        .assert()
        .failure();

    horizon(&dir)
        .args(["project", "compare", "Base", "Copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy"));
}

#[test]
fn export_writes_csv() {
    let dir = seeded();
    let out = dir.path().join("base.csv");
    horizon(&dir)
        .args(["project", "show", "Base", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("month,income,expense"));
}

#[test]
fn export_json_to_stdout() {
    let dir = seeded();
    horizon(&dir)
        .args(["project", "show", "Base", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""));
}

#[test]
fn unknown_scenario_fails() {
    let dir = seeded();
    horizon(&dir)
        .args(["project", "show", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
