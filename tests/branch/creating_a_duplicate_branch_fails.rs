use crate::common::command::{init_repository_dir, run_jot_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn creating_a_duplicate_branch_fails(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    run_jot_command(repository_dir.path(), &["branch", "other"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["branch", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));

    // the current branch counts as existing too
    run_jot_command(repository_dir.path(), &["branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}
