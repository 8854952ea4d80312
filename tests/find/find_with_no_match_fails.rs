use crate::common::command::{init_repository_dir, run_jot_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn find_with_no_match_fails(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    run_jot_command(repository_dir.path(), &["find", "no such message"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Found no commit with that message.",
        ));
}
