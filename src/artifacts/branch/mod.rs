//! Branch names and the HEAD state

pub mod branch_name;
