use crate::common::command::{init_repository_dir, run_jot_command, stdout_of};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn staging_many_files_lists_them_all(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let mut file_names = write_generated_files(repository_dir.path(), 4)
        .into_iter()
        .map(|spec| {
            spec.path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
                .expect("generated file name is valid UTF-8")
        })
        .collect::<Vec<_>>();

    for file_name in &file_names {
        run_jot_command(repository_dir.path(), &["add", file_name])
            .assert()
            .success();
    }

    // the staged section lists every file, in name order
    file_names.sort();
    let expected_section = format!("=== Staged Files ===\n{}\n\n", file_names.join("\n"));
    let status = stdout_of(repository_dir.path(), &["status"])?;
    assert!(
        status.contains(&expected_section),
        "status output {status:?} is missing section {expected_section:?}"
    );

    Ok(())
}
