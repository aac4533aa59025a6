//! Domain objects of the repository model

pub mod branch;
pub mod log;
pub mod objects;
