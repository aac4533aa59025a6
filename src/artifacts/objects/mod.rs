//! Stored objects: blobs (file content) and commits (history snapshots),
//! both identified by the SHA-1 hash of their serialized form.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a hex-encoded SHA-1 object id
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated object id used in command output
pub const SHORT_ID_LENGTH: usize = 7;
