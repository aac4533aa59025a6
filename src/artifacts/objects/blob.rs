//! Blob object representing file content
//!
//! Blobs hold the raw bytes of a working-tree file, nothing else. Each unique
//! content is stored at most once, keyed by its SHA-1 hash.

use crate::artifacts::objects::object::Object;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Object for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}
