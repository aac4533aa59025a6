//! User-facing commands
//!
//! - `init`: bootstrap empty repository state
//! - `add`: hash files into the object store and stage them
//! - `commit`: snapshot the staging index into the history graph
//! - `log`: walk and print the commit history
//! - `status`: report staged paths and working-tree changes
//! - `checkout`: switch branches or detach at a commit, restoring files
//! - `branch`: create a branch at the current commit

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
