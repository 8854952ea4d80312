use crate::common::command::{init_repository_dir, run_jot_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn deleting_the_current_branch_fails(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    run_jot_command(repository_dir.path(), &["rm-branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the current branch."));
}
