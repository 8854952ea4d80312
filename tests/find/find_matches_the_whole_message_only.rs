use crate::common::command::{committed_repository_dir, run_jot_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn find_matches_the_whole_message_only(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    // a prefix of the message is not a match
    run_jot_command(repository_dir.path(), &["find", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Found no commit with that message.",
        ));

    run_jot_command(repository_dir.path(), &["find", "first wug"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$").unwrap());
}
