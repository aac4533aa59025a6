//! Branch names and HEAD
//!
//! A branch is a mutable pointer file `branches/<name>` holding a commit id.
//! HEAD is a single text file naming either the current branch (attached) or
//! a commit id directly (detached). Branch names are validated so that the
//! two cases stay unambiguous: a name can never parse as a 40-hex object id.

use crate::artifacts::objects::object_id::ObjectId;

/// Name of the branch a fresh repository starts on
pub const DEFAULT_BRANCH: &str = "master";

/// A validated branch name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Parse and validate a branch name
    ///
    /// Valid names are non-empty, consist of alphanumerics, `-`, `_` and `.`,
    /// do not start with a dot, and are not parseable as an object id.
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }
        if name.starts_with('.') {
            anyhow::bail!("branch name cannot start with a dot: {}", name);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            anyhow::bail!("invalid branch name: {}", name);
        }
        if ObjectId::try_parse(name.clone()).is_ok() {
            anyhow::bail!("branch name is indistinguishable from a commit id: {}", name);
        }

        Ok(Self(name))
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HEAD indicator state
///
/// Either attached to a branch, or detached at a specific commit. The
/// uninitialized state (no HEAD file) defaults to attached on the default
/// branch with no commit yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Attached(BranchName),
    Detached(ObjectId),
}

impl Head {
    /// Parse the content of the HEAD file
    ///
    /// Empty content falls back to the default branch. A value that parses as
    /// an object id is a detached HEAD; anything else must be a branch name.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let content = content.trim();

        if content.is_empty() {
            return Ok(Head::Attached(BranchName::default_branch()));
        }

        if let Ok(oid) = ObjectId::try_parse(content.to_string()) {
            return Ok(Head::Detached(oid));
        }

        Ok(Head::Attached(BranchName::try_parse(content.to_string())?))
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }
}
