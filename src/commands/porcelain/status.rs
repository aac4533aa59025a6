use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use std::collections::BTreeMap;
use std::io::Write;

// Terminology:
// - staged files: paths recorded in the index for the next commit
// - modified files: working-tree files whose content hash differs from the
//   last commit's snapshot, including paths absent from that snapshot
impl Repository {
    pub fn status(&mut self) -> anyhow::Result<()> {
        let staged = self.index().load()?;

        writeln!(self.writer(), "Staged files:")?;
        for path in staged.keys() {
            writeln!(self.writer(), "  {}", path)?;
        }
        writeln!(self.writer())?;

        // baseline is the last commit's file map; with no commits yet,
        // everything present is modified relative to nothing
        let baseline = match self.refs().resolve_current()? {
            Some(oid) => self.database().load_commit(&oid)?.files().clone(),
            None => BTreeMap::new(),
        };

        writeln!(self.writer(), "Changes since last commit:")?;
        let mut changed = false;

        for path in self.workspace().list_files()? {
            let live_id = self.workspace().parse_blob(&path)?.object_id()?;
            let name = path.display().to_string();

            if baseline.get(&name) != Some(&live_id) {
                writeln!(self.writer(), "  modified: {}", name)?;
                changed = true;
            }
        }

        if !changed {
            writeln!(self.writer(), "  no changes")?;
        }

        Ok(())
    }
}
