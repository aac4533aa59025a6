//! Repository facade
//!
//! A `Repository` is an explicit per-invocation handle over the on-disk
//! state: it holds no caches spanning calls, only the paths of its areas and
//! an injected output writer. All command implementations live in
//! `commands::porcelain` as `impl Repository` blocks.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the repository storage directory
pub const STORAGE_DIR: &str = ".tin";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    index: Index,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Construct a handle rooted at the given working-tree path without
    /// requiring an initialized repository (used by `init`)
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let storage = path.join(STORAGE_DIR);

        let database = Database::new(
            storage.join("objects").into_boxed_path(),
            storage.join("commits").into_boxed_path(),
        );
        let index = Index::new(storage.join("index").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(storage.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            index,
            workspace,
            refs,
        })
    }

    /// Construct a handle over an existing repository, failing when the
    /// storage directory is missing
    pub fn open(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let repository = Self::new(path, writer)?;

        if !repository.storage_path().is_dir() {
            anyhow::bail!(
                "not a tin repository (or any of the parent directories): run 'tin init' first"
            );
        }

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage_path(&self) -> std::path::PathBuf {
        self.path.join(STORAGE_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
