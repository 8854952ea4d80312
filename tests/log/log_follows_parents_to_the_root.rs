use crate::common::command::{committed_repository_dir, jot_commit, run_jot_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_follows_parents_to_the_root(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("wug.txt"),
        "version 2".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "wug.txt"])
        .assert()
        .success();
    jot_commit(repository_dir.path(), "second wug")
        .assert()
        .success();

    let stdout = stdout_of(repository_dir.path(), &["log"])?;

    // one block per commit, newest first
    assert_eq!(stdout.lines().filter(|line| *line == "===").count(), 3);
    let second = stdout.find("second wug").expect("second commit missing");
    let first = stdout.find("first wug").expect("first commit missing");
    let initial = stdout.find("initial commit").expect("initial commit missing");
    assert!(second < first);
    assert!(first < initial);

    Ok(())
}
