//! Working-directory migration between two commits
//!
//! Switching branches and resetting both replace the working directory with
//! the tracked contents of a target commit. That involves:
//!
//! 1. Scanning the working directory for files that would be clobbered
//! 2. Planning file system operations (delete, write)
//! 3. Applying the plan to the working directory
//!
//! ## Conflict Detection
//!
//! A working file that is untracked by the current commit but present in the
//! target commit would be silently overwritten with unrelated content, so the
//! migration refuses to run. Files untracked by both commits are left alone.
//!
//! ## Safety
//!
//! The full working directory is scanned before any change is made, so a
//! conflict aborts the migration with the working directory intact.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::JotError;
use anyhow::Context;
use std::collections::BTreeMap;

/// Planner and executor for moving the working directory between commits
pub struct Migration<'r> {
    workspace: &'r Workspace,
    database: &'r Database,
    /// Tree of the commit the working directory currently reflects
    current_tree: &'r BTreeMap<String, ObjectId>,
    /// Tree of the commit being moved to
    target_tree: &'r BTreeMap<String, ObjectId>,
    /// Files to delete from the working directory
    deletions: Vec<String>,
    /// Files to write, with the blob to restore
    writes: Vec<(String, ObjectId)>,
}

impl<'r> Migration<'r> {
    pub fn new(
        workspace: &'r Workspace,
        database: &'r Database,
        current_tree: &'r BTreeMap<String, ObjectId>,
        target_tree: &'r BTreeMap<String, ObjectId>,
    ) -> Self {
        Self {
            workspace,
            database,
            current_tree,
            target_tree,
            deletions: Vec::new(),
            writes: Vec::new(),
        }
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.plan_changes()?;
        self.update_workspace()?;

        Ok(())
    }

    fn plan_changes(&mut self) -> anyhow::Result<()> {
        for file_name in self.workspace.list_files()? {
            let tracked = self.current_tree.contains_key(&file_name);

            if !tracked && self.target_tree.contains_key(&file_name) {
                return Err(JotError::UntrackedFileInTheWay.into());
            }
            if tracked && !self.target_tree.contains_key(&file_name) {
                self.deletions.push(file_name);
            }
        }

        self.writes = self
            .target_tree
            .iter()
            .map(|(file_name, oid)| (file_name.clone(), oid.clone()))
            .collect();

        Ok(())
    }

    fn update_workspace(&self) -> anyhow::Result<()> {
        for file_name in &self.deletions {
            self.workspace.remove_file(file_name)?;
        }

        for (file_name, oid) in &self.writes {
            let blob = self
                .database
                .parse_object_as_blob(oid)?
                .with_context(|| format!("Failed to parse blob object {}", oid))?;
            self.workspace.write_file(file_name, blob.content())?;
        }

        Ok(())
    }
}
