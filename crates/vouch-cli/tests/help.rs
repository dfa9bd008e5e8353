use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the vouch-probe binary.
#[allow(deprecated)]
fn probe_cmd() -> Command {
    Command::cargo_bin("vouch-probe").unwrap()
}

#[test]
fn help_works() {
    probe_cmd().arg("--help").assert().success();
}

#[test]
fn explain_describes_each_policy() {
    probe_cmd()
        .args(["explain", "verify"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("verify: enforces the condition"));

    probe_cmd()
        .args(["explain", "Assume"])
        .assert()
        .success()
        .stdout(predicate::str::contains("undefined behavior"));
}

#[test]
fn explain_rejects_unknown_policy() {
    probe_cmd()
        .args(["explain", "enforce"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown policy: enforce"));
}

#[test]
fn run_help_lists_the_check_form() {
    probe_cmd()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--form <FORM>"));
}
