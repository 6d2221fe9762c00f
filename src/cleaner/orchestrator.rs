//! Orchestrator for cleaning every discovered file.

use crate::cleaner::executor::{CleanExecutor, CleanOptions, CleanResult};
use crate::cleaner::patterns::PatternCatalog;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// Summary of cleaning results.
#[derive(Debug, Default, Serialize)]
pub struct CleanSummary {
    /// Debug statements removed (or found, in dry-run mode) across all files.
    pub total_removed: usize,
    /// Files with at least one statement.
    pub modified_files: Vec<PathBuf>,
    /// Files that could not be processed.
    pub failed_count: usize,
}

impl CleanSummary {
    pub fn modified_count(&self) -> usize {
        self.modified_files.len()
    }
}

/// Orchestrator running the executor over many files.
pub struct CleanOrchestrator<'a> {
    executor: CleanExecutor<'a>,
    parallelism: usize,
}

impl<'a> CleanOrchestrator<'a> {
    /// Create a new orchestrator.
    pub fn new(catalog: &'a PatternCatalog, options: CleanOptions, parallelism: usize) -> Self {
        Self {
            executor: CleanExecutor::new(catalog, options),
            parallelism: parallelism.max(1),
        }
    }

    /// Clean all files, returning results in input order.
    ///
    /// Files are handled independently; a failure on one does not stop the rest.
    pub fn clean_all(&self, files: &[PathBuf]) -> Vec<CleanResult> {
        if self.parallelism == 1 {
            return files.iter().map(|path| self.executor.clean(path)).collect();
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallelism)
            .build()
        {
            Ok(pool) => pool.install(|| {
                files
                    .par_iter()
                    .map(|path| self.executor.clean(path))
                    .collect()
            }),
            Err(e) => {
                tracing::warn!("Could not build thread pool, cleaning sequentially: {}", e);
                files.iter().map(|path| self.executor.clean(path)).collect()
            }
        }
    }

    /// Get summary statistics from results.
    pub fn summarize(results: &[CleanResult]) -> CleanSummary {
        let mut summary = CleanSummary::default();

        for result in results {
            match result {
                CleanResult::Success(file) => {
                    if file.removed > 0 {
                        summary.total_removed += file.removed;
                        summary.modified_files.push(file.path.clone());
                    }
                }
                CleanResult::Failed { .. } => {
                    summary.failed_count += 1;
                }
            }
        }

        summary
    }
}
