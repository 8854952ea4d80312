use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::errors::JotError;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create the `.jot` state directory, the shared initial commit and the
    /// default branch pointing at it.
    pub fn init(&self) -> anyhow::Result<()> {
        if self.repository_path().exists() {
            return Err(JotError::RepositoryExists.into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .jot/blobs directory")?;
        fs::create_dir_all(self.graph().commits_path())
            .context("Failed to create .jot/commits directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .jot/refs/heads directory")?;

        // Every repository starts from the same parentless commit, so the
        // initial commit shares its id across all repositories.
        let root_id = self.graph().insert(&Commit::root())?;

        let branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        self.refs().create_branch(&branch, &root_id)?;
        self.refs()
            .set_head(&branch)
            .context("Failed to create initial HEAD reference")?;

        fs::write(self.index().path(), b"").context("Failed to create .jot/index file")?;

        Ok(())
    }
}
