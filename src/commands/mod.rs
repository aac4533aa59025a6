//! Command implementations
//!
//! All user-facing commands live under `porcelain`, one file per command,
//! each extending `Repository` with the operation it implements. Recoverable
//! user-facing outcomes (nothing to commit, unknown checkout target, branch
//! already exists, and so on) print a message through the repository writer
//! and return `Ok`; only fatal conditions propagate as errors.

pub mod porcelain;
