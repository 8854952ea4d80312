use crate::common::command::{committed_repository_dir, jot_commit, run_jot_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn the_global_log_spans_all_branches(committed_repository_dir: TempDir) {
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
    write_file(FileSpec::new(
        repository_dir.path().join("more.txt"),
        "back on master".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "more.txt"])
        .assert()
        .success();
    jot_commit(repository_dir.path(), "more on master")
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initial commit"))
        .stdout(predicate::str::contains("first wug"))
        .stdout(predicate::str::contains("zap on other"))
        .stdout(predicate::str::contains("more on master"));
}
