use crate::common::command::{
    committed_repository_dir, jot_commit, log_commit_ids, run_jot_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restoring_a_file_from_an_earlier_commit(
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

    // newest first: second wug, first wug, initial commit
    let ids = log_commit_ids(repository_dir.path())?;
    let first_wug_id = &ids[1];

    run_jot_command(
        repository_dir.path(),
        &["checkout", first_wug_id, "--", "wug.txt"],
    )
    .assert()
    .success();
    assert_eq!(read_file(&repository_dir.path().join("wug.txt")), "version 1");

    // a unique prefix of the id resolves to the same commit
    write_file(FileSpec::new(
        repository_dir.path().join("wug.txt"),
        "scratch".to_string(),
    ));
    run_jot_command(
        repository_dir.path(),
        &["checkout", &first_wug_id[..8], "--", "wug.txt"],
    )
    .assert()
    .success();
    assert_eq!(read_file(&repository_dir.path().join("wug.txt")), "version 1");

    Ok(())
}
