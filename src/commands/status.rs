use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report the branch list and both sides of the staging area.
    ///
    /// Sections appear in a fixed order and every section ends with a blank
    /// line, so the output is stable for scripting.
    pub fn status(&self) -> anyhow::Result<()> {
        let current_branch = self.refs().current_branch()?;
        let branches = self.refs().list_branches()?;

        let mut index = self.index();
        index.rehydrate()?;

        writeln!(self.writer(), "=== Branches ===")?;
        for branch in &branches {
            if *branch == current_branch {
                writeln!(self.writer(), "*{branch}")?;
            } else {
                writeln!(self.writer(), "{branch}")?;
            }
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Staged Files ===")?;
        for file_name in index.additions().keys() {
            writeln!(self.writer(), "{file_name}")?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Removed Files ===")?;
        for file_name in index.removals().keys() {
            writeln!(self.writer(), "{file_name}")?;
        }
        writeln!(self.writer())?;

        // Only explicitly staged changes are recorded, so these two
        // sections are always empty.
        writeln!(self.writer(), "=== Modifications Not Staged For Commit ===")?;
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Untracked Files ===")?;
        writeln!(self.writer())?;

        Ok(())
    }
}
