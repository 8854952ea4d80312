use crate::common::command::{committed_repository_dir, run_jot_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn overwriting_the_working_copy_from_head(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("wug.txt"),
        "scratch".to_string(),
    ));

    run_jot_command(repository_dir.path(), &["checkout", "--", "wug.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&repository_dir.path().join("wug.txt")), "version 1");
}
