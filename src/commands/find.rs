use crate::areas::repository::Repository;
use crate::errors::JotError;
use std::io::Write;

impl Repository {
    /// Print the ids of every commit whose message matches exactly.
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let mut matched = false;

        for (commit_id, commit) in self.graph().all()? {
            if commit.message() == message {
                writeln!(self.writer(), "{commit_id}")?;
                matched = true;
            }
        }

        if !matched {
            return Err(JotError::NoMatchingCommit.into());
        }

        Ok(())
    }
}
