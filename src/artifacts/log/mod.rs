//! History traversal

pub mod rev_walk;
