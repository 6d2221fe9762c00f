//! Command implementations.

pub mod clean_debug;
pub mod completions;
