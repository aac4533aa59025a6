//! Staging index
//!
//! The index records which paths, at which content hashes, the next commit
//! will contain. It is persisted as a JSON object mapping path to blob id at
//! `.tin/index`, read fresh and rewritten in full on every mutating
//! operation; there is no in-memory caching across invocations and no
//! concurrency control (last writer wins).

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::Path;

/// Staged paths mapped to their blob ids, deterministically ordered
pub type StagedEntries = BTreeMap<String, ObjectId>;

#[derive(Debug, new)]
pub struct Index {
    path: Box<Path>,
}

impl Index {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted entries; a missing or empty index file is an empty
    /// staging area, never an error
    pub fn load(&self) -> anyhow::Result<StagedEntries> {
        if !self.path.exists() {
            return Ok(StagedEntries::new());
        }

        let content = std::fs::read(&self.path)
            .with_context(|| format!("unable to read index file {}", self.path.display()))?;

        if content.is_empty() {
            return Ok(StagedEntries::new());
        }

        serde_json::from_slice(&content).context("malformed index file")
    }

    /// Overwrite the persisted entries entirely
    pub fn save(&self, entries: &StagedEntries) -> anyhow::Result<()> {
        let content = serde_json::to_vec_pretty(entries).context("failed to serialize index")?;

        std::fs::write(&self.path, content)
            .with_context(|| format!("unable to write index file {}", self.path.display()))
    }

    /// Upsert a single path: load, insert, save
    pub fn stage(&self, path: &str, oid: ObjectId) -> anyhow::Result<()> {
        let mut entries = self.load()?;
        entries.insert(path.to_string(), oid);
        self.save(&entries)
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        self.save(&StagedEntries::new())
    }
}

#[cfg(test)]
mod tests {
    use super::{Index, StagedEntries};
    use crate::artifacts::objects::object_id::ObjectId;

    fn test_index(dir: &assert_fs::TempDir) -> Index {
        Index::new(dir.path().join("index").into_boxed_path())
    }

    #[test]
    fn missing_index_file_loads_as_empty() {
        let dir = assert_fs::TempDir::new().unwrap();
        let index = test_index(&dir);

        assert!(index.load().unwrap().is_empty());
    }

    #[test]
    fn staged_entries_survive_a_reload() {
        let dir = assert_fs::TempDir::new().unwrap();
        let index = test_index(&dir);

        index.stage("a.txt", ObjectId::hash(b"one")).unwrap();
        index.stage("b.txt", ObjectId::hash(b"two")).unwrap();

        let entries = index.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("a.txt"), Some(&ObjectId::hash(b"one")));
        assert_eq!(entries.get("b.txt"), Some(&ObjectId::hash(b"two")));
    }

    #[test]
    fn staging_an_existing_path_overwrites_its_hash() {
        let dir = assert_fs::TempDir::new().unwrap();
        let index = test_index(&dir);

        index.stage("a.txt", ObjectId::hash(b"one")).unwrap();
        index.stage("a.txt", ObjectId::hash(b"changed")).unwrap();

        let entries = index.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("a.txt"), Some(&ObjectId::hash(b"changed")));
    }

    #[test]
    fn clear_empties_the_persisted_index() {
        let dir = assert_fs::TempDir::new().unwrap();
        let index = test_index(&dir);

        index.stage("a.txt", ObjectId::hash(b"one")).unwrap();
        index.clear().unwrap();

        assert!(index.load().unwrap().is_empty());
        assert!(index.path().exists());
    }

    #[test]
    fn save_replaces_rather_than_merges() {
        let dir = assert_fs::TempDir::new().unwrap();
        let index = test_index(&dir);

        index.stage("a.txt", ObjectId::hash(b"one")).unwrap();

        let mut replacement = StagedEntries::new();
        replacement.insert("b.txt".to_string(), ObjectId::hash(b"two"));
        index.save(&replacement).unwrap();

        let entries = index.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("b.txt"));
    }
}
