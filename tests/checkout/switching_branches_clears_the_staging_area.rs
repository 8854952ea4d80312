use crate::common::command::{committed_repository_dir, run_jot_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn switching_branches_clears_the_staging_area(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    run_jot_command(repository_dir.path(), &["branch", "other"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("extra.txt"),
        "staged then abandoned".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "extra.txt"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["checkout", "other"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*other"))
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}
