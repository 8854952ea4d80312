use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::errors::JotError;

impl Repository {
    /// Stage the working copy of `file_name` for the next commit.
    pub fn add(&self, file_name: &str) -> anyhow::Result<()> {
        if !self.workspace().contains(file_name) {
            return Err(JotError::FileNotFound.into());
        }

        let data = self.workspace().read_file(file_name)?;
        let blob = Blob::new(data);
        let blob_id = blob.object_id()?;

        let (_, head_commit) = self.head_commit()?;

        let mut index = self.index();
        index.rehydrate()?;

        // The staging decision compares the new hash against every tracked
        // and staged value, not only the entry for this file name, so
        // identical contents under another name influence the outcome.
        let tracked_name = head_commit.tree().contains_key(file_name);
        let tracked_hash = head_commit.tracks_hash(&blob_id);

        if !tracked_name || (!tracked_hash && !index.addition_contains_hash(&blob_id)) {
            self.database().store(blob)?;
            index.stage_addition(file_name, blob_id);
        } else if head_commit.tree().get(file_name) == Some(&blob_id)
            && index.addition_contains_hash(&blob_id)
        {
            // The file matches its committed state again: forget the pending
            // addition.
            index.unstage(file_name, true);
        } else if tracked_hash && index.removal_contains_hash(&blob_id) {
            // Re-adding content staged for removal cancels that removal.
            index.unstage(file_name, false);
        }

        index.write_updates()?;

        Ok(())
    }
}
