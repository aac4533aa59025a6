use crate::areas::repository::Repository;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage files: hash each one into the object store and record its
    /// path-to-hash mapping in the index. Paths are processed in input order;
    /// a missing path is a warning, not a failure, and the remaining paths
    /// are still processed.
    pub fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        for path in paths {
            if !self.workspace().file_exists(Path::new(path)) {
                writeln!(self.writer(), "Warning: file '{}' does not exist.", path)?;
                continue;
            }

            let blob = self.workspace().parse_blob(Path::new(path))?;
            let blob_id = self.database().store_blob(&blob)?;
            self.index().stage(path, blob_id)?;

            writeln!(self.writer(), "Added '{}'", path)?;
        }

        Ok(())
    }
}
