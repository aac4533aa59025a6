use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::Head;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// Snapshot the staging index into a new commit and advance the current
    /// branch to it. An empty index is a normal outcome that leaves all
    /// state unchanged.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let files = self.index().load()?;

        if files.is_empty() {
            writeln!(self.writer(), "Nothing to commit, staging area is empty.")?;
            return Ok(());
        }

        let branch = match self.refs().current_head()? {
            Head::Attached(branch) => branch,
            Head::Detached(_) => {
                writeln!(
                    self.writer(),
                    "Cannot commit in detached HEAD state; check out a branch first."
                )?;
                return Ok(());
            }
        };

        let parent = self.refs().resolve_current()?;
        let commit = Commit::new(message.trim().to_string(), files, parent);

        // store first, then move the ref, then clear the index; a crash
        // mid-way leaves a valid object store with a stale ref or index
        let commit_id = self.database().store_commit(&commit)?;
        self.refs().advance(&commit_id)?;
        self.index().clear()?;

        writeln!(
            self.writer(),
            "Committed to {}: {} - {}",
            branch,
            commit_id.to_short_id(),
            commit.message()
        )?;

        Ok(())
    }
}
