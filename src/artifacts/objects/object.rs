use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;

/// A stored object: anything that can serialize itself into the byte form
/// the database persists, and whose identity is the hash of that form.
pub trait Object {
    fn serialize(&self) -> Result<Bytes>;

    fn object_id(&self) -> Result<ObjectId> {
        Ok(ObjectId::hash(&self.serialize()?))
    }
}
