//! References (branches and HEAD)
//!
//! Branches are mutable pointer files `branches/<name>` holding a commit id.
//! HEAD is a single text file holding either the current branch name
//! (attached) or a commit id (detached); an absent HEAD file means the
//! repository is on the default branch with no commits yet.

use crate::artifacts::branch::branch_name::{BranchName, Head};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository storage root (`.tin`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn branches_path(&self) -> PathBuf {
        self.path.join("branches")
    }

    fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.branches_path().join(name.as_ref())
    }

    /// Read the HEAD indicator, defaulting to the default branch when no
    /// HEAD file exists (first-ever repository state)
    pub fn current_head(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(Head::Attached(BranchName::default_branch()));
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("unable to read HEAD file {}", head_path.display()))?;

        Head::parse(&content)
    }

    /// Resolve HEAD to a commit id
    ///
    /// Attached: read the current branch's pointer file; an absent file means
    /// no commits yet on that branch (not an error). Detached: the recorded
    /// commit id itself.
    pub fn resolve_current(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.current_head()? {
            Head::Attached(branch) => self.read_branch(&branch),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    pub fn read_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);

        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("unable to read branch file {}", branch_path.display()))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Advance the current branch to a new commit, creating the pointer file
    /// if absent. Fast-forward only; refuses to run while detached.
    pub fn advance(&self, oid: &ObjectId) -> anyhow::Result<()> {
        match self.current_head()? {
            Head::Attached(branch) => self.write_branch(&branch, oid),
            Head::Detached(_) => anyhow::bail!("cannot advance a branch while HEAD is detached"),
        }
    }

    /// Write a new branch pointer file at the given commit. The caller is
    /// responsible for the already-exists and empty-history checks, which are
    /// user-facing outcomes rather than errors.
    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            anyhow::bail!("branch {} already exists", name);
        }

        self.write_branch(name, oid)
    }

    /// Attach HEAD to a branch
    pub fn set_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        self.write_head(name.as_ref())
    }

    /// Detach HEAD at a commit
    pub fn set_detached(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.write_head(oid.as_ref())
    }

    fn write_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        let branches_path = self.branches_path();
        std::fs::create_dir_all(&branches_path)
            .with_context(|| format!("unable to create {}", branches_path.display()))?;

        let branch_path = self.branch_path(name);
        std::fs::write(&branch_path, oid.as_ref())
            .with_context(|| format!("unable to write branch file {}", branch_path.display()))
    }

    fn write_head(&self, content: &str) -> anyhow::Result<()> {
        let head_path = self.head_path();
        std::fs::write(&head_path, content)
            .with_context(|| format!("unable to write HEAD file {}", head_path.display()))
    }
}
