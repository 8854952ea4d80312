use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::JotError;

impl Repository {
    /// Record the staged snapshot as a new commit and advance the current
    /// branch to it.
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        if message.is_empty() {
            return Err(JotError::EmptyCommitMessage.into());
        }

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(JotError::NothingStaged.into());
        }

        let (head_id, head_commit) = self.head_commit()?;

        // Start from the parent snapshot, then fold in the staged changes.
        let mut tree = head_commit.tree().clone();
        for (file_name, oid) in index.additions() {
            tree.insert(file_name.clone(), oid.clone());
        }
        for (file_name, oid) in index.removals() {
            // A removal only applies while the tree still maps the file to
            // the recorded hash; stale entries are silently ignored.
            if tree.get(file_name) == Some(oid) {
                tree.remove(file_name);
            }
        }

        let commit = Commit::new(message.to_string(), Some(head_id), tree);
        let commit_id = self.graph().insert(&commit)?;

        let branch = self.refs().current_branch()?;
        self.refs().advance_branch(&branch, &commit_id)?;

        index.clear();
        index.write_updates()?;

        Ok(())
    }
}
