//! Integration tests for the CLI surface: help, version, argument parsing,
//! and the checks that run before any remote call.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with an isolated config file and no ambient vault or consent.
fn glacier_purge(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("glacier-purge"));
    cmd.env("NO_COLOR", "1")
        .env("GLACIER_PURGE_CONFIG", config_dir.path().join("config.yaml"))
        .env_remove("GLACIER_PURGE_VAULT")
        .env_remove("GLACIER_PURGE_YES");
    cmd
}

fn cmd() -> (TempDir, Command) {
    let dir = TempDir::new().expect("temp dir");
    let cmd = glacier_purge(&dir);
    (dir, cmd)
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    let (_dir, mut cmd) = cmd();
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Empty and delete an S3 Glacier vault"));
}

#[test]
fn test_cli_help_lists_every_step_command() {
    let (_dir, mut cmd) = cmd();
    let assert = cmd.arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    for name in ["init", "check", "delete-archives", "delete-vault", "purge", "config"] {
        assert!(stdout.contains(name), "help is missing {name}:\n{stdout}");
    }
}

#[test]
fn test_cli_version_flag_shows_version() {
    let (_dir, mut cmd) = cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glacier-purge"));
}

#[test]
fn test_version_command_shows_version() {
    let (_dir, mut cmd) = cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "glacier-purge {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let (_dir, mut cmd) = cmd();
    let assert = cmd.args(["version", "--json"]).assert().success();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_color_env_in_standard_form_is_accepted() {
    for value in ["1", "true", ""] {
        let (_dir, mut cmd) = cmd();
        cmd.env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("glacier-purge"));
    }
}

#[test]
fn test_no_color_flag_is_accepted() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["--no-color", "version"]).assert().success();
}

// --- Argument parsing ---

#[test]
fn test_check_requires_job_id() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["check", "--vault", "archive-bin"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--job-id"));
}

#[test]
fn test_delete_archives_requires_job_id() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["delete-archives", "--vault", "archive-bin", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--job-id"));
}

#[test]
fn test_underscore_aliases_are_accepted() {
    // Parsing succeeds; the run then stops at the missing vault.
    let (_dir, mut cmd) = cmd();
    cmd.args(["delete_archives", "--job_id", "job-1", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--vault"));
}

#[test]
fn test_zero_poll_interval_is_a_usage_error() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["init", "--vault", "v", "--poll-interval", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_is_a_usage_error() {
    let (_dir, mut cmd) = cmd();
    cmd.arg("nuke").assert().code(2);
}

// --- Validation before any remote call ---

#[test]
fn test_init_without_vault_fails() {
    let (_dir, mut cmd) = cmd();
    cmd.arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--vault"))
        .stderr(predicate::str::contains("GLACIER_PURGE_VAULT"));
}

#[test]
fn test_invalid_vault_name_is_rejected() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["check", "--vault", "bad/name", "--job-id", "j"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid vault name 'bad/name'"));
}

#[test]
fn test_invalid_account_id_is_rejected() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["init", "--vault", "v", "--account-id", "12345"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid account id '12345'"));
}

#[test]
fn test_vault_from_env_is_validated() {
    let (_dir, mut cmd) = cmd();
    cmd.env("GLACIER_PURGE_VAULT", "no spaces allowed")
        .args(["check", "--job-id", "j"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid vault name"));
}

// --- Confirmation ---

#[test]
fn test_delete_vault_without_terminal_requires_yes() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["delete-vault", "--vault", "archive-bin"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_purge_without_terminal_requires_yes() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["purge", "--vault", "archive-bin"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_delete_archives_without_terminal_requires_yes() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["delete-archives", "--vault", "archive-bin", "--job-id", "job-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_purge_validates_vault_before_prompting() {
    let (_dir, mut cmd) = cmd();
    cmd.args(["purge", "--vault", "bad/name"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid vault name"))
        .stderr(predicate::str::contains("--yes").not());
}

// --- JSON error object ---

#[test]
fn test_json_errors_are_printed_as_object_on_stdout() {
    let (_dir, mut cmd) = cmd();
    let assert = cmd
        .args(["check", "--vault", "bad/name", "--job-id", "j", "--json"])
        .assert()
        .code(1);
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "INVALID_VAULT");
    assert!(
        value["message"]
            .as_str()
            .is_some_and(|m| m.contains("bad/name")),
        "message names the vault: {value}"
    );
}
