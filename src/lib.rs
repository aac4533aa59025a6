//! tin — a tiny version-control engine.
//!
//! A content-addressed object store layered with a commit history graph,
//! branch pointers, and a staging index. The crate is organized in three
//! layers:
//!
//! - [`areas`]: the repository building blocks (object database, staging
//!   index, refs, workspace) and the `Repository` facade tying them together
//! - [`artifacts`]: the domain objects (blobs, commits, object ids, branch
//!   names, history walks)
//! - [`commands`]: the user-facing command implementations

pub mod areas;
pub mod artifacts;
pub mod commands;
