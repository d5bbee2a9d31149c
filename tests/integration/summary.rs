use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempDir;

fn summary_output(temp: &TempDir) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_dirscout"))
        .arg("--start_dir")
        .arg(temp.path())
        .write_stdin("2\n3\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn summarises_tree() {
    let temp = TempDir::new("summary", "dirscout_tests");
    temp.write_file("one.txt", 1000);
    temp.write_file("docs/two.TXT", 536);
    temp.write_file("docs/LICENSE", 0);
    temp.write_file("src/lib.rs", 512);

    let out = summary_output(&temp);

    assert!(out.contains("Total Files: 4\n"));
    assert!(out.contains("Total Bytes Used: 2.0 KB\n"));
    assert!(out.contains(".txt: 2 files\n"));
    assert!(out.contains(".rs: 1 files\n"));
    assert!(out.contains("\n: 1 files\n"));
}

#[test]
fn empty_tree_reports_zero() {
    let temp = TempDir::new("summary_empty", "dirscout_tests");

    Command::new(env!("CARGO_BIN_EXE_dirscout"))
        .arg("--start_dir")
        .arg(temp.path())
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Files: 0\nTotal Bytes Used: 0B\n"));
}

#[test]
fn repeated_summaries_agree() {
    let temp = TempDir::new("summary_repeat", "dirscout_tests");
    temp.write_file("a.c", 5);
    temp.write_file("x/b.h", 7);

    let strip_timing =
        |s: String| s.lines().filter(|l| !l.starts_with("Time taken")).collect::<Vec<_>>().join("\n");
    assert_eq!(strip_timing(summary_output(&temp)), strip_timing(summary_output(&temp)));
}
