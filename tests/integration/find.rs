use assert_cmd::{Command, assert::Assert};
use predicates::prelude::*;

use crate::common::TempDir;

fn find_session(temp: &TempDir, input: &str) -> Assert {
    Command::new(env!("CARGO_BIN_EXE_dirscout"))
        .arg("--start_dir")
        .arg(temp.path())
        .write_stdin(input)
        .assert()
        .success()
}

#[test]
fn finds_nested_file() {
    let temp = TempDir::new("find_nested", "dirscout_tests");
    temp.write_file("a/b/c/Quarterly Report (final).pdf", 10);
    let expected = temp.path().join("a").join("b").join("c").join("Quarterly Report (final).pdf");

    find_session(&temp, "1\nQuarterly Report (final).pdf\n3\n")
        .stdout(predicate::str::contains(format!("File found at: {}", expected.display())))
        .stdout(predicate::str::contains("Time taken: "));
}

#[test]
fn reports_missing_file() {
    let temp = TempDir::new("find_missing", "dirscout_tests");
    temp.write_file("present.txt", 1);

    find_session(&temp, "1\nabsent.txt\n3\n").stdout(predicate::str::contains("absent.txt not found."));
}

#[test]
fn rejects_invalid_filename_before_walking() {
    let temp = TempDir::new("find_invalid", "dirscout_tests");

    find_session(&temp, "1\n*.txt\n3\n")
        .stdout(predicate::str::contains("Invalid filename."))
        .stdout(predicate::str::contains("Processing...").not());
}

#[test]
fn filename_flag_skips_prompt() {
    let temp = TempDir::new("find_flag", "dirscout_tests");
    temp.write_file("deep/target.log", 3);

    Command::new(env!("CARGO_BIN_EXE_dirscout"))
        .args(["--filename", "target.log", "--start_dir"])
        .arg(temp.path())
        .write_stdin("1\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the filename").not())
        .stdout(predicate::str::contains("File found at: ").count(2));
}
