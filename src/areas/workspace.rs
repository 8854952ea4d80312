use anyhow::Context;
use bytes::Bytes;
use std::path::Path;

/// Name of the repository state directory inside the working directory.
pub const REPOSITORY_DIR: &str = ".jot";

const IGNORED_PATHS: [&str; 3] = [REPOSITORY_DIR, ".", ".."];

/// The flat working directory.
///
/// Only plain files directly inside the repository root are versioned;
/// subdirectories and the `.jot` state directory are ignored.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the versionable files in the working directory, sorted by name
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut file_names = std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to list working directory: {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|file_name| !IGNORED_PATHS.contains(&file_name.as_str()))
            .collect::<Vec<_>>();

        file_names.sort();
        Ok(file_names)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.path.join(file_name).is_file()
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_name);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    pub fn write_file(&self, file_name: &str, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(file_name);

        std::fs::write(&file_path, data)
            .with_context(|| format!("Failed to write file: {:?}", file_path))?;

        Ok(())
    }

    pub fn remove_file(&self, file_name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(file_name);

        std::fs::remove_file(&file_path)
            .with_context(|| format!("Failed to remove file: {:?}", file_path))?;

        Ok(())
    }
}
