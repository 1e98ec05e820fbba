//! Integration tests for edit command

#![allow(deprecated)]
#![cfg(unix)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{editor_script, jctl_cmd, journal, read, ALPHA, BETA};

#[test]
fn test_edit_single_match_skips_selection() {
    let journal = journal();
    let tools = TempDir::new().unwrap();
    let editor = editor_script(tools.path(), "printf '%s\\n' 'More soil.' >> \"$1\"\n");

    jctl_cmd(journal.path())
        .env("EDITOR", editor)
        .args(["edit", "alpha"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File changed."))
        .stdout(predicate::str::contains("Please enter the number").not());

    assert_eq!(
        read(journal.path(), "2024-01-01-alpha"),
        format!("{}More soil.\n", ALPHA)
    );
}

#[test]
fn test_edit_unchanged_reports_no_changes() {
    let journal = journal();

    jctl_cmd(journal.path())
        .args(["edit", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."))
        .stdout(predicate::str::contains("Update timestamp?").not());

    assert_eq!(read(journal.path(), "2024-02-01-beta"), BETA);
}

#[test]
fn test_edit_choose_from_several() {
    let journal = journal();
    let tools = TempDir::new().unwrap();
    let editor = editor_script(tools.path(), "printf '%s\\n' 'Picked.' >> \"$1\"\n");

    // "a" matches both names; 2 is the older entry
    jctl_cmd(journal.path())
        .env("EDITOR", editor)
        .args(["e", "a"])
        .write_stdin("2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("More than one entry found"))
        .stdout(predicate::str::contains("   1) 2024-02-01-beta"))
        .stdout(predicate::str::contains("   2) 2024-01-01-alpha"));

    assert!(read(journal.path(), "2024-01-01-alpha").ends_with("Picked.\n"));
    assert_eq!(read(journal.path(), "2024-02-01-beta"), BETA);
}

#[test]
fn test_edit_rejects_out_of_range_then_cancels_on_eof() {
    let journal = journal();

    jctl_cmd(journal.path())
        .args(["edit", "a"])
        .write_stdin("3\nabc\n")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Exiting selection..."))
        .stderr(predicate::str::contains("jctl: Selection cancelled"));
}

#[test]
fn test_edit_then_update_timestamp() {
    let journal = journal();
    let tools = TempDir::new().unwrap();
    let editor = editor_script(tools.path(), "printf '%s\\n' 'Later.' >> \"$1\"\n");

    jctl_cmd(journal.path())
        .env("EDITOR", editor)
        .args(["edit", "alpha"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Timestamp updated."));

    let text = read(journal.path(), "2024-01-01-alpha");
    assert!(!text.contains("date: 2024-01-01 09:00:00"));
    assert!(text.contains("title: \"Alpha\"\n"));
    assert!(text.ends_with("Planted the garden.\nLater.\n"));
}

#[test]
fn test_editor_failure_leaves_entry() {
    let journal = journal();
    let tools = TempDir::new().unwrap();
    let editor = editor_script(tools.path(), "printf 'junk' > \"$1\"\nexit 3\n");

    jctl_cmd(journal.path())
        .env("EDITOR", editor)
        .args(["edit", "alpha"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("editor failed"));

    assert_eq!(read(journal.path(), "2024-01-01-alpha"), ALPHA);
}

#[test]
fn test_edit_no_match() {
    let journal = journal();

    jctl_cmd(journal.path())
        .args(["edit", "Alpha"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No entries found"));
}

#[test]
fn test_scratch_dir_is_left_empty() {
    let journal = journal();
    let scratch = TempDir::new().unwrap();
    let tools = TempDir::new().unwrap();
    let editor = editor_script(tools.path(), "printf '%s\\n' 'x' >> \"$1\"\n");

    fs::create_dir_all(journal.path().join(".jctl")).unwrap();
    fs::write(
        journal.path().join(".jctl").join("config.toml"),
        format!("scratch_dir = {:?}\n", scratch.path().display().to_string()),
    )
    .unwrap();

    jctl_cmd(journal.path())
        .env("EDITOR", editor)
        .args(["edit", "beta"])
        .write_stdin("n\n")
        .assert()
        .success();

    assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_journal_directory() {
    let temp = TempDir::new().unwrap();

    jctl_cmd(&temp.path().join("nowhere"))
        .args(["edit", "alpha"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Journal directory not found"));
}
