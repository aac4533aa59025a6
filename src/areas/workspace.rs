//! Working-tree file system operations

use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::areas::repository::STORAGE_DIR;

#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        let content = std::fs::read(&full_path)
            .with_context(|| format!("unable to read file {}", full_path.display()))?;

        Ok(Bytes::from(content))
    }

    pub fn parse_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_path)?))
    }

    /// Write a file, creating parent directories and unconditionally
    /// overwriting any existing content at that path
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("unable to create directory {}", parent.display()))?;
        }

        std::fs::write(&full_path, content)
            .with_context(|| format!("unable to write file {}", full_path.display()))
    }

    /// List every regular file under the workspace root, relative to it,
    /// in name order, skipping the repository storage directory
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let files = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != STORAGE_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();

        Ok(files)
    }
}
