use crate::areas::repository::Repository;
use crate::errors::JotError;

impl Repository {
    /// Unstage `file_name`, and stage it for removal if the head commit
    /// tracks it.
    pub fn rm(&self, file_name: &str) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let (_, head_commit) = self.head_commit()?;

        let staged = index.additions().contains_key(file_name);
        let tracked = head_commit.tree().get(file_name).cloned();

        if !staged && tracked.is_none() {
            return Err(JotError::NothingToRemove.into());
        }

        if staged {
            index.unstage(file_name, true);
        }

        if let Some(oid) = tracked {
            index.stage_removal(file_name, oid);
            // Only delete the working copy when removing a tracked file; the
            // user may already have deleted it by hand.
            if self.workspace().contains(file_name) {
                self.workspace().remove_file(file_name)?;
            }
        }

        index.write_updates()?;

        Ok(())
    }
}
