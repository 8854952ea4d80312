use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use crate::errors::JotError;
use anyhow::Context;

impl Repository {
    /// `checkout -- <file>`: restore a file from the head commit.
    pub fn checkout_file(&self, file_name: &str) -> anyhow::Result<()> {
        let (_, head_commit) = self.head_commit()?;

        self.restore_file(&head_commit, file_name)
    }

    /// `checkout <commit> -- <file>`: restore a file from the given commit.
    ///
    /// The commit may be referenced by its full id or a unique prefix.
    pub fn checkout_file_at(&self, commit_ref: &str, file_name: &str) -> anyhow::Result<()> {
        let commit_id = self.graph().resolve_reference(commit_ref)?;
        let commit = self.graph().get(&commit_id)?;

        self.restore_file(&commit, file_name)
    }

    /// `checkout <branch>`: replace the workspace with the branch head
    /// snapshot and move HEAD to that branch.
    pub fn checkout_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let branch = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| JotError::BranchNotFound)?;
        let target_id = self
            .refs()
            .read_branch(&branch)?
            .ok_or(JotError::BranchNotFound)?;

        if branch == self.refs().current_branch()? {
            return Err(JotError::CheckoutCurrentBranch.into());
        }

        let (_, head_commit) = self.head_commit()?;
        let target_commit = self.graph().get(&target_id)?;

        let mut migration = Migration::new(
            self.workspace(),
            self.database(),
            head_commit.tree(),
            target_commit.tree(),
        );
        migration.apply_changes()?;

        self.refs().set_head(&branch)?;

        let mut index = self.index();
        index.clear();
        index.write_updates()?;

        Ok(())
    }

    fn restore_file(&self, commit: &Commit, file_name: &str) -> anyhow::Result<()> {
        let blob_id = commit
            .tree()
            .get(file_name)
            .ok_or(JotError::FileNotInCommit)?;
        let blob = self
            .database()
            .parse_object_as_blob(blob_id)?
            .with_context(|| format!("object {blob_id} is not a blob"))?;

        self.workspace().write_file(file_name, blob.content())?;

        Ok(())
    }
}
