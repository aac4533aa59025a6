use crate::areas::repository::Repository;
use crate::artifacts::log::rev_walk::RevWalk;
use std::io::Write;

impl Repository {
    /// Print the commit history from the current commit, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        let Some(start) = self.refs().resolve_current()? else {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        };

        for entry in RevWalk::new(self.database(), start) {
            let (oid, commit) = entry?;

            writeln!(self.writer(), "commit {}", oid)?;
            writeln!(self.writer(), "Date: {}", commit.timestamp())?;
            writeln!(self.writer())?;
            for line in commit.message().lines() {
                writeln!(self.writer(), "    {}", line)?;
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
