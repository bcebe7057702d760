//! Utility modules for the page splitter.

pub mod exec;
pub mod fs;
