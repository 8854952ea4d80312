use crate::common::command::{committed_repository_dir, jot_commit, run_jot_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn deleting_a_branch_keeps_its_commits(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    run_jot_command(repository_dir.path(), &["branch", "other"])
        .assert()
        .success();
    run_jot_command(repository_dir.path(), &["checkout", "other"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("zap.txt"),
        "only on other".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "zap.txt"])
        .assert()
        .success();
    jot_commit(repository_dir.path(), "zap on other")
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["checkout", "master"])
        .assert()
        .success();
    run_jot_command(repository_dir.path(), &["rm-branch", "other"])
        .assert()
        .success();

    // the pointer is gone
    run_jot_command(repository_dir.path(), &["checkout", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such branch exists."));
    run_jot_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other").not());

    // but the commits it reached are still stored
    run_jot_command(repository_dir.path(), &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zap on other"));
    run_jot_command(repository_dir.path(), &["find", "zap on other"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$").unwrap());
}
