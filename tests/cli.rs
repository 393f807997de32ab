//! End-to-end CLI tests for `ti`.
//!
//! Each test runs the binary in its own temp directory so the store file
//! (`project_issues.json`) is isolated per test.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ti(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ti").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn no_args_prints_usage() {
    let dir = TempDir::new().unwrap();
    ti(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn add_assigns_sequential_ids() {
    let dir = TempDir::new().unwrap();
    ti(dir.path())
        .args(["add", "Fix bug", "bug", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Added #1: Fix bug"));
    ti(dir.path())
        .args(["add", "Write docs", "todo", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Added #2: Write docs"));
}

#[test]
fn list_groups_bugs_before_todos() {
    let dir = TempDir::new().unwrap();
    ti(dir.path()).args(["add", "Fix bug", "bug", "high"]).assert().success();
    ti(dir.path()).args(["add", "Write docs", "todo", "low"]).assert().success();

    let output = ti(dir.path()).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let bugs_at = stdout.find("🐛 Bugs").expect("bug group missing");
    let todos_at = stdout.find("📝 TODOs").expect("todo group missing");
    assert!(bugs_at < todos_at, "bug group must come first:\n{stdout}");
    assert!(stdout.contains("🔥 #1 - Fix bug (high)"));
    assert!(stdout.contains("📌 #2 - Write docs (low)"));
}

#[test]
fn done_moves_issue_between_status_lists() {
    let dir = TempDir::new().unwrap();
    ti(dir.path()).args(["add", "Fix bug", "bug", "high"]).assert().success();

    ti(dir.path())
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Completed #1: Fix bug"));

    ti(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No open issues found"));

    ti(dir.path())
        .args(["list", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 - Fix bug"));
}

#[test]
fn done_unknown_id_reports_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    ti(dir.path())
        .args(["done", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Issue #99 not found"));

    // The store file was not created by a failed completion.
    assert!(!dir.path().join("project_issues.json").exists());
}

#[test]
fn stats_counts_after_adds_and_complete() {
    let dir = TempDir::new().unwrap();
    ti(dir.path()).args(["add", "Bug one", "bug", "high"]).assert().success();
    ti(dir.path()).args(["add", "Task one"]).assert().success();
    ti(dir.path()).args(["add", "Idea one", "idea"]).assert().success();
    ti(dir.path()).args(["done", "3"]).assert().success();

    ti(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Issues: 3"))
        .stdout(predicate::str::contains("Completed: 1"))
        .stdout(predicate::str::contains("Open: 2"))
        .stdout(predicate::str::contains("🐛 Open Bugs: 1"))
        .stdout(predicate::str::contains("📝 Open TODOs: 1"))
        .stdout(predicate::str::contains("💡 Ideas: 1"))
        .stdout(predicate::str::contains("Progress: 33.3% complete"));
}

#[test]
fn stats_empty_store_has_no_progress_line() {
    let dir = TempDir::new().unwrap();
    ti(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Issues: 0"))
        .stdout(predicate::str::contains("Progress").not());
}

#[test]
fn list_empty_store_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    ti(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No open issues found"));
}

#[test]
fn unknown_type_is_stored_but_outside_display_buckets() {
    let dir = TempDir::new().unwrap();
    ti(dir.path())
        .args(["add", "Odd one", "spike", "urgent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Added #1: Odd one"));

    // Open and stored, but no display group renders it.
    let output = ti(dir.path()).arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("Odd one"));
    assert!(!stdout.contains("No open issues found"));

    let contents = fs::read_to_string(dir.path().join("project_issues.json")).unwrap();
    assert!(contents.contains("\"spike\""));
    assert!(contents.contains("\"urgent\""));
}

#[test]
fn corrupt_store_reports_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("project_issues.json"), "{not json").unwrap();

    ti(dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot parse store file"));
}

#[test]
fn store_file_layout_survives_commands() {
    let dir = TempDir::new().unwrap();
    ti(dir.path()).args(["add", "Fix bug", "bug", "high"]).assert().success();
    ti(dir.path()).args(["done", "1"]).assert().success();

    let contents = fs::read_to_string(dir.path().join("project_issues.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["next_id"], 2);
    assert_eq!(value["issues"][0]["id"], 1);
    assert_eq!(value["issues"][0]["type"], "bug");
    assert_eq!(value["issues"][0]["status"], "completed");
    assert!(value["issues"][0]["completed"].is_string());
}

#[test]
fn json_flag_emits_machine_readable_stats() {
    let dir = TempDir::new().unwrap();
    ti(dir.path()).args(["add", "Bug one", "bug"]).assert().success();

    let output = ti(dir.path()).args(["stats", "--json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["open_bugs"], 1);
    assert_eq!(value["completion"], 0.0);
}

#[test]
fn json_flag_emits_issue_on_add() {
    let dir = TempDir::new().unwrap();
    let output = ti(dir.path())
        .args(["add", "Fix bug", "bug", "high", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["id"], 1);
    assert_eq!(value["type"], "bug");
    assert_eq!(value["priority"], "high");
}
