use crate::common::command::{committed_repository_dir, run_jot_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn branching_does_not_switch(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    run_jot_command(repository_dir.path(), &["branch", "other"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*master"));
}
