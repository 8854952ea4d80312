use crate::common::command::{committed_repository_dir, run_jot_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn an_unchanged_file_is_not_staged(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    // the working copy matches the committed version exactly
    run_jot_command(repository_dir.path(), &["add", "wug.txt"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}
