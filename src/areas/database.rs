//! Object database
//!
//! Stores blobs under `objects/<hash>` and commits under `commits/<hash>`,
//! one file per object, keyed by the SHA-1 hash of the serialized content.
//! Objects are write-once: storing an already-present object is a no-op, and
//! there are no update or delete operations.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Database {
    objects_path: Box<Path>,
    commits_path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.objects_path
    }

    pub fn commits_path(&self) -> &Path {
        &self.commits_path
    }

    /// Store a blob, returning its id. Idempotent: content already present
    /// under the same hash is left untouched.
    pub fn store_blob(&self, blob: &Blob) -> anyhow::Result<ObjectId> {
        let oid = blob.object_id()?;
        self.write_once(self.objects_path.join(oid.as_ref()), blob.serialize()?)?;

        Ok(oid)
    }

    pub fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.objects_path.join(oid.as_ref());

        if !object_path.exists() {
            anyhow::bail!("object {} not found", oid);
        }

        let content = std::fs::read(&object_path)
            .with_context(|| format!("unable to read object file {}", object_path.display()))?;

        Ok(Bytes::from(content))
    }

    /// Store a commit in its canonical serialized form, returning its id
    pub fn store_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let oid = commit.object_id()?;
        self.write_once(self.commits_path.join(oid.as_ref()), commit.serialize()?)?;

        Ok(oid)
    }

    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        let commit_path = self.commits_path.join(oid.as_ref());

        if !commit_path.exists() {
            anyhow::bail!("commit {} not found", oid);
        }

        let content = std::fs::read(&commit_path)
            .with_context(|| format!("unable to read commit file {}", commit_path.display()))?;

        Commit::deserialize(&content)
    }

    pub fn contains_commit(&self, oid: &ObjectId) -> bool {
        self.commits_path.join(oid.as_ref()).exists()
    }

    fn write_once(&self, path: PathBuf, content: Bytes) -> anyhow::Result<()> {
        if path.exists() {
            return Ok(());
        }

        std::fs::create_dir_all(
            path.parent()
                .with_context(|| format!("invalid object path {}", path.display()))?,
        )
        .with_context(|| format!("unable to create object directory for {}", path.display()))?;

        std::fs::write(&path, &content)
            .with_context(|| format!("unable to write object file {}", path.display()))?;

        Ok(())
    }
}
