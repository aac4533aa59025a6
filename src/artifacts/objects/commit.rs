//! Commit object
//!
//! A commit snapshots the full staged file set at commit time, along with a
//! message, a UTC timestamp, and an optional parent commit id. Commits form a
//! singly-linked history via `parent`; root commits have none.
//!
//! ## Canonical form
//!
//! A commit's identity is the SHA-1 hash of its serialized JSON. The encoding
//! must be byte-stable for logically identical commits: the struct fields are
//! declared in alphabetical order (serde emits them in declaration order) and
//! `files` is a `BTreeMap`, so every key in the output is sorted. Two commits
//! with identical message, timestamp, files, and parent therefore collide by
//! design. The digest algorithm is fixed for the lifetime of a repository.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An immutable commit record
///
/// Field order matters: serialization must emit sorted keys (see module docs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full snapshot of staged paths to blob ids, not a delta
    files: BTreeMap<String, ObjectId>,
    /// Commit message
    message: String,
    /// Parent commit id, absent for root commits
    parent: Option<ObjectId>,
    /// UTC ISO-8601 creation time
    timestamp: String,
}

impl Commit {
    /// Create a commit stamped with the current UTC time
    pub fn new(
        message: String,
        files: BTreeMap<String, ObjectId>,
        parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            files,
            message,
            parent,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    /// Create a commit with an explicit timestamp
    pub fn new_with_timestamp(
        message: String,
        files: BTreeMap<String, ObjectId>,
        parent: Option<ObjectId>,
        timestamp: String,
    ) -> Self {
        Commit {
            files,
            message,
            parent,
            timestamp,
        }
    }

    pub fn deserialize(data: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(data).context("malformed commit object")
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn files(&self) -> &BTreeMap<String, ObjectId> {
        &self.files
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }
}

impl Object for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec(self).context("failed to serialize commit")?;
        Ok(Bytes::from(content))
    }
}
