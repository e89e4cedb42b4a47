#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_dynamic_completion_with_complete_env() {
    // When COMPLETE is set, the binary prints the registration script and exits
    Command::cargo_bin("lab")
        .unwrap()
        .env("COMPLETE", "bash")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("lab")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source <(COMPLETE=bash lab)"));
}

#[test]
fn test_completions_zsh() {
    Command::cargo_bin("lab")
        .unwrap()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~/.zshrc"));
}

#[test]
fn test_completions_fish() {
    Command::cargo_bin("lab")
        .unwrap()
        .args(["completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPLETE=fish lab | psub"));
}

#[test]
fn test_completions_invalid_shell() {
    Command::cargo_bin("lab")
        .unwrap()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid shell: tcsh"));
}

#[test]
fn test_subcommand_candidates_include_aliases() {
    Command::cargo_bin("lab")
        .unwrap()
        .env("COMPLETE", "bash")
        .env("_CLAP_COMPLETE_INDEX", "1")
        .env("_CLAP_IFS", "\n")
        .args(["--", "lab", "mer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merge-request"));
}
