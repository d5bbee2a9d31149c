use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempDir;

fn dirscout() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirscout"))
}

#[test]
fn shows_help() {
    dirscout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--start_dir").and(predicate::str::contains("--filename")));
}

#[test]
fn exit_choice_ends_session() {
    let temp = TempDir::new("exit", "dirscout_tests");
    dirscout()
        .arg("--start_dir")
        .arg(temp.path())
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Find a file").and(predicate::str::contains("3. Exit")));
}

#[test]
fn closed_stdin_ends_session() {
    let temp = TempDir::new("eof", "dirscout_tests");
    dirscout().arg("--start_dir").arg(temp.path()).write_stdin("").assert().success();
}

#[test]
fn invalid_choice_is_reported() {
    let temp = TempDir::new("invalid", "dirscout_tests");
    dirscout()
        .arg("--start_dir")
        .arg(temp.path())
        .write_stdin("hello\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}
