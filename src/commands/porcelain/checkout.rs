use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Switch to a branch or detach at a commit, restoring the working tree
    ///
    /// Resolution order: an existing branch name wins over a commit hash.
    /// Restoration copies every file of the resolved commit out of the
    /// object store, unconditionally overwriting working-tree files;
    /// uncommitted edits are not preserved.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        if let Ok(branch) = BranchName::try_parse(target.to_string())
            && self.refs().branch_exists(&branch)
        {
            let tip = self.refs().read_branch(&branch)?;
            self.refs().set_branch(&branch)?;
            writeln!(self.writer(), "Switched to branch '{}'", target)?;

            // a branch created before any commit has nothing to restore
            if let Some(oid) = tip {
                self.restore_working_tree(&oid)?;
            }

            return Ok(());
        }

        if let Ok(oid) = ObjectId::try_parse(target.to_string())
            && self.database().contains_commit(&oid)
        {
            self.refs().set_detached(&oid)?;
            writeln!(
                self.writer(),
                "Checked out commit {} (detached HEAD)",
                oid.to_short_id()
            )?;
            self.restore_working_tree(&oid)?;

            return Ok(());
        }

        writeln!(
            self.writer(),
            "error: unknown branch or commit '{}'",
            target
        )?;

        Ok(())
    }

    fn restore_working_tree(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let commit = self.database().load_commit(oid)?;

        for (path, blob_id) in commit.files() {
            let content = self.database().load_blob(blob_id)?;
            self.workspace().write_file(Path::new(path), &content)?;
        }

        writeln!(
            self.writer(),
            "Checked out files from commit {}",
            oid.to_short_id()
        )?;

        Ok(())
    }
}
