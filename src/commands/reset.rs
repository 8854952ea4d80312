use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;

impl Repository {
    /// Move the current branch to `commit_ref` and restore its snapshot in
    /// the workspace.
    ///
    /// HEAD keeps naming the same branch; only the branch pointer moves.
    pub fn reset(&self, commit_ref: &str) -> anyhow::Result<()> {
        let target_id = self.graph().resolve_reference(commit_ref)?;
        let target_commit = self.graph().get(&target_id)?;
        let (_, head_commit) = self.head_commit()?;

        let mut migration = Migration::new(
            self.workspace(),
            self.database(),
            head_commit.tree(),
            target_commit.tree(),
        );
        migration.apply_changes()?;

        let branch = self.refs().current_branch()?;
        self.refs().advance_branch(&branch, &target_id)?;

        let mut index = self.index();
        index.clear();
        index.write_updates()?;

        Ok(())
    }
}
