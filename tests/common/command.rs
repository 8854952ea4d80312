use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository with `wug.txt` tracked by a first commit.
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let wug = FileSpec::new(
        init_repository_dir.path().join("wug.txt"),
        "version 1".to_string(),
    );
    write_file(wug);

    run_jot_command(init_repository_dir.path(), &["add", "wug.txt"])
        .assert()
        .success();

    jot_commit(init_repository_dir.path(), "first wug")
        .assert()
        .success();

    init_repository_dir
}

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn jot_commit(dir: &Path, message: &str) -> Command {
    run_jot_command(dir, &["commit", message])
}

/// Commit id the current branch points at, read straight from the refs area.
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = dir.join(".jot").join("HEAD");
    let head_content = std::fs::read_to_string(head_path)?;

    let ref_path = head_content
        .trim()
        .strip_prefix("ref: ")
        .ok_or("HEAD does not name a branch")?;
    let commit_sha = std::fs::read_to_string(dir.join(".jot").join(ref_path))?;

    Ok(commit_sha.trim().to_string())
}

/// Commit ids printed by `jot log`, newest first.
pub fn log_commit_ids(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let stdout = stdout_of(dir, &["log"])?;

    Ok(stdout
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect())
}

pub fn stdout_of(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_jot_command(dir, args).output()?;

    Ok(String::from_utf8(output.stdout)?)
}
