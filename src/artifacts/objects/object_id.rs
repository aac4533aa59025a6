//! Object identifier (SHA-1 hash)
//!
//! Object ids are 40-character hexadecimal strings identifying all stored
//! objects (blobs and commits). Identical content always hashes to the same
//! id, which is what makes the object store content-addressed and
//! deduplicating.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_ID_LENGTH};
use serde::de::Error;
use sha1::{Digest, Sha1};

/// A validated 40-hex SHA-1 object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id from a string
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("invalid object id length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("invalid object id characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Compute the id of a byte sequence
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);

        let digest = hasher.finalize();
        Self(format!("{digest:x}"))
    }

    /// Abbreviated form used in command output (first 7 hex characters)
    pub fn to_short_id(&self) -> String {
        self.0.split_at(SHORT_ID_LENGTH).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::try_parse(raw).map_err(D::Error::custom)
    }
}
