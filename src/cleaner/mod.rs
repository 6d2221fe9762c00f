//! Debug statement detection and removal.
//!
//! This module provides:
//! - The catalog of debug-statement patterns per language family
//! - Discovery of candidate source files
//! - Per-file cleaning with dry-run and backup support
//! - Orchestration and summaries over many files

mod discovery;
mod executor;
mod orchestrator;
mod patterns;

pub use discovery::{DiscoveryOptions, FileDiscovery};
pub use executor::{
    backup_path, CleanExecutor, CleanOptions, CleanResult, CleanedFile, BACKUP_TIMESTAMP_FORMAT,
};
pub use orchestrator::{CleanOrchestrator, CleanSummary};
pub use patterns::{DebugPattern, Language, PatternCatalog, Stripped};
