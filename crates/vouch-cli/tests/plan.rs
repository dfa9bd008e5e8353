//! Integration tests for running probe plans from TOML files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use vouch_test_util::{diagnostics, terminated_by_abort};

#[allow(deprecated)]
fn probe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vouch-probe").unwrap();
    cmd.env("RUST_BACKTRACE", "0");
    cmd
}

fn write_plan(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("vouch.toml");
    std::fs::write(&path, text).expect("write plan");
    path
}

#[test]
fn runs_cases_in_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = write_plan(
        temp_dir.path(),
        r#"
        schema = "vouch.probe.v1"
        policy = "verify"

        [[cases]]
        name = "equal"
        value = 5
        bound = 5

        [[cases]]
        name = "tolerated"
        policy = "ignore"
        value = 6
        bound = 5

        [[cases]]
        name = "hinted"
        policy = "assume"
        value = 1
        bound = 5
        "#,
    );

    probe_cmd()
        .args(["plan", "--config", plan.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            "ok equal (verify)\n\
             ok tolerated (ignore, violation ignored)\n\
             ok hinted (assume)\n",
        );
}

#[test]
fn verify_failure_stops_the_plan() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = write_plan(
        temp_dir.path(),
        r#"
        message = "plan default"

        [[cases]]
        name = "first"
        value = 1
        bound = 2

        [[cases]]
        name = "breaks"
        value = 3
        bound = 2
        message = "bound exceeded"

        [[cases]]
        name = "never"
        value = 1
        bound = 2
        "#,
    );

    let output = probe_cmd()
        .args(["plan", "--config", plan.to_str().unwrap()])
        .output()
        .expect("spawn vouch-probe");

    assert!(terminated_by_abort(&output.status));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok first (verify)"));
    assert!(!stdout.contains("never"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let found = diagnostics(&stderr);
    assert_eq!(found.len(), 1, "stderr was:\n{stderr}");
    assert_eq!(found[0].message, "bound exceeded");
}

#[test]
fn policy_override_turns_failures_into_ignored_violations() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = write_plan(
        temp_dir.path(),
        r#"
        [[cases]]
        name = "breaks"
        value = 3
        bound = 2
        "#,
    );

    probe_cmd()
        .args([
            "plan",
            "--config",
            plan.to_str().unwrap(),
            "--policy",
            "ignore",
        ])
        .assert()
        .success()
        .stdout("ok breaks (ignore, violation ignored)\n");
}

#[test]
fn case_filter_selects_one_case() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = write_plan(
        temp_dir.path(),
        r#"
        [[cases]]
        name = "a"
        value = 1
        bound = 2

        [[cases]]
        name = "b"
        value = 3
        bound = 2
        "#,
    );

    probe_cmd()
        .args(["plan", "--config", plan.to_str().unwrap(), "--case", "a"])
        .assert()
        .success()
        .stdout("ok a (verify)\n");
}

#[test]
fn failing_assume_case_is_refused_before_running_anything() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = write_plan(
        temp_dir.path(),
        r#"
        [[cases]]
        name = "fine"
        value = 1
        bound = 2

        [[cases]]
        name = "ub"
        policy = "assume"
        value = 3
        bound = 2
        "#,
    );

    probe_cmd()
        .args(["plan", "--config", plan.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("case ub: assume with a failing condition"));
}

#[test]
fn missing_plan_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    probe_cmd()
        .args(["plan", "--config", missing.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read plan"));
}

#[test]
fn empty_plan_notes_it_on_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();
    let plan = write_plan(temp_dir.path(), "schema = \"vouch.probe.v1\"\n");

    probe_cmd()
        .args(["plan", "--config", plan.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("has no cases"));
}
