use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Walk the current branch history from HEAD back to the initial commit.
    pub fn log(&self) -> anyhow::Result<()> {
        let (head_id, _) = self.head_commit()?;

        for entry in self.graph().ancestry(head_id) {
            let (commit_id, commit) = entry?;
            self.print_commit(&commit_id, &commit)?;
        }

        Ok(())
    }

    /// Display every commit ever made, in no particular order.
    pub fn global_log(&self) -> anyhow::Result<()> {
        for (commit_id, commit) in self.graph().all()? {
            self.print_commit(&commit_id, &commit)?;
        }

        Ok(())
    }

    fn print_commit(&self, commit_id: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "===")?;
        writeln!(self.writer(), "commit {commit_id}")?;
        writeln!(self.writer(), "Date: {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
