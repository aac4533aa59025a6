use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the current commit
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let name = match BranchName::try_parse(name.to_string()) {
            Ok(name) => name,
            Err(err) => {
                writeln!(self.writer(), "error: {}", err)?;
                return Ok(());
            }
        };

        if self.refs().branch_exists(&name) {
            writeln!(self.writer(), "Branch '{}' already exists.", name)?;
            return Ok(());
        }

        let Some(oid) = self.refs().resolve_current()? else {
            writeln!(self.writer(), "No commits to branch from.")?;
            return Ok(());
        };

        self.refs().create_branch(&name, &oid)?;

        writeln!(
            self.writer(),
            "Created branch '{}' at {}",
            name,
            oid.to_short_id()
        )?;

        Ok(())
    }
}
