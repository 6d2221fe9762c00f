//! Debug Sweeper - strip leftover debug statements from source trees
//!
//! This crate provides functionality for:
//! - Matching debug statements (`dump`, `dd`, `console.log`, `debugger`, ...)
//!   line by line in PHP and JavaScript/TypeScript sources
//! - Discovering candidate files under a directory tree
//! - Cleaning files in place, with dry-run and timestamped backups

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweeperError};
