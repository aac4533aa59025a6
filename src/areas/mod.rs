//! Core repository components
//!
//! The fundamental building blocks of a repository:
//!
//! - `database`: content-addressed store for blobs and commits
//! - `index`: staging area for the next commit
//! - `refs`: HEAD and branch pointer management
//! - `repository`: high-level facade coordinating the other areas
//! - `workspace`: working-tree file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
