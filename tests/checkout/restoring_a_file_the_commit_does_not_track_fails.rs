use crate::common::command::{committed_repository_dir, run_jot_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn restoring_a_file_the_commit_does_not_track_fails(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    run_jot_command(repository_dir.path(), &["checkout", "--", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist in that commit."));
}
