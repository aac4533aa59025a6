use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::DEFAULT_BRANCH;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.storage_path().is_dir() {
            writeln!(self.writer(), "Repository already initialized.")?;
            return Ok(());
        }

        fs::create_dir_all(self.database().commits_path())
            .context("failed to create the commits directory")?;
        fs::create_dir_all(self.database().objects_path())
            .context("failed to create the objects directory")?;
        fs::create_dir_all(self.refs().branches_path())
            .context("failed to create the branches directory")?;

        fs::write(self.refs().head_path(), DEFAULT_BRANCH)
            .context("failed to create the initial HEAD file")?;

        writeln!(
            self.writer(),
            "Initialized empty tin repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
