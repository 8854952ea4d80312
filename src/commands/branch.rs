use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::JotError;

impl Repository {
    /// Create a new branch pointing at the head commit.
    ///
    /// The command does not switch to the new branch.
    pub fn branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(branch_name.to_string())?;
        let (head_id, _) = self.head_commit()?;

        self.refs().create_branch(&branch, &head_id)?;

        Ok(())
    }

    /// Delete the pointer to `branch_name`, leaving its commits in place.
    pub fn rm_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| JotError::BranchMissing)?;

        if branch == self.refs().current_branch()? {
            return Err(JotError::RemoveCurrentBranch.into());
        }

        self.refs().delete_branch(&branch)?;

        Ok(())
    }
}
