use crate::common::command::{committed_repository_dir, get_head_commit_sha, run_jot_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn a_new_branch_points_at_the_current_commit(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    run_jot_command(repository_dir.path(), &["branch", "other"])
        .assert()
        .success();

    let other_ref = repository_dir
        .path()
        .join(".jot")
        .join("refs")
        .join("heads")
        .join("other");
    assert_eq!(
        std::fs::read_to_string(other_ref)?.trim(),
        get_head_commit_sha(repository_dir.path())?
    );

    Ok(())
}
