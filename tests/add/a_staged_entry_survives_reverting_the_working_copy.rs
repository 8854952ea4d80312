use crate::common::command::{committed_repository_dir, jot_commit, run_jot_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn a_staged_entry_survives_reverting_the_working_copy(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    // stage a modified version
    write_file(FileSpec::new(
        repository_dir.path().join("wug.txt"),
        "version 2".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "wug.txt"])
        .assert()
        .success();

    // reverting the working copy and re-adding does not unstage the
    // previously staged version
    write_file(FileSpec::new(
        repository_dir.path().join("wug.txt"),
        "version 1".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "wug.txt"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nwug.txt"));

    // the commit records the staged version, not the working copy
    jot_commit(repository_dir.path(), "keep the staged wug")
        .assert()
        .success();
    run_jot_command(repository_dir.path(), &["checkout", "--", "wug.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&repository_dir.path().join("wug.txt")), "version 2");
}
