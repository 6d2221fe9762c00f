//! Executor for cleaning a single file.

use crate::cleaner::patterns::PatternCatalog;
use crate::error::{Result, SweeperError};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp format appended to backup file names.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Outcome of cleaning one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedFile {
    /// File that was processed.
    pub path: PathBuf,
    /// Number of debug statements matched and removed.
    pub removed: usize,
    /// Whether the cleaned content differs from the original.
    pub changed: bool,
    /// Backup written before overwriting, if any.
    pub backup_path: Option<PathBuf>,
}

/// Result of a clean operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CleanResult {
    /// The file was processed (possibly with nothing to remove).
    Success(CleanedFile),
    /// Reading, backing up or writing the file failed.
    Failed {
        path: PathBuf,
        error: String,
        /// Backup left on disk when only the overwrite failed.
        #[serde(skip_serializing_if = "Option::is_none")]
        backup_path: Option<PathBuf>,
    },
}

impl CleanResult {
    pub fn path(&self) -> &Path {
        match self {
            CleanResult::Success(file) => &file.path,
            CleanResult::Failed { path, .. } => path,
        }
    }
}

/// Options for the clean executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// If true, report matches without writing anything.
    pub dry_run: bool,
    /// If true, copy the original next to it before overwriting.
    pub backup: bool,
}

/// Executor for stripping debug statements from files.
pub struct CleanExecutor<'a> {
    catalog: &'a PatternCatalog,
    options: CleanOptions,
}

impl<'a> CleanExecutor<'a> {
    /// Create a new executor over the given catalog.
    pub fn new(catalog: &'a PatternCatalog, options: CleanOptions) -> Self {
        Self { catalog, options }
    }

    /// Clean a single file, capturing any error in the result.
    pub fn clean(&self, path: &Path) -> CleanResult {
        match self.clean_file(path) {
            Ok(file) => CleanResult::Success(file),
            Err(e) => {
                tracing::warn!("Failed to clean {}: {}", path.display(), e);
                let backup_path = match &e {
                    SweeperError::Write { backup, .. } => backup.clone(),
                    _ => None,
                };
                CleanResult::Failed {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                    backup_path,
                }
            }
        }
    }

    /// Clean a single file.
    ///
    /// Nothing is written when no pattern matches or in dry-run mode. A backup
    /// is only created when the file is actually overwritten.
    pub fn clean_file(&self, path: &Path) -> Result<CleanedFile> {
        let original = fs::read_to_string(path).map_err(|source| SweeperError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let stripped = self.catalog.strip(&original);
        let changed = stripped.content != original;

        let mut cleaned = CleanedFile {
            path: path.to_path_buf(),
            removed: stripped.removed,
            changed,
            backup_path: None,
        };

        if !changed {
            return Ok(cleaned);
        }

        if self.options.dry_run {
            tracing::debug!(path = %path.display(), removed = cleaned.removed, "Dry run, not writing");
            return Ok(cleaned);
        }

        if self.options.backup {
            let timestamp = chrono::Local::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
            let backup = backup_path(path, &timestamp);
            fs::copy(path, &backup).map_err(|source| SweeperError::Backup {
                path: path.to_path_buf(),
                backup: backup.clone(),
                source,
            })?;
            tracing::info!(backup = %backup.display(), "Backup created");
            cleaned.backup_path = Some(backup);
        }

        fs::write(path, &stripped.content).map_err(|source| SweeperError::Write {
            path: path.to_path_buf(),
            backup: cleaned.backup_path.clone(),
            source,
        })?;

        Ok(cleaned)
    }
}

/// Sibling path `<path>.backup.<timestamp>`.
pub fn backup_path(path: &Path, timestamp: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".backup.");
    name.push(timestamp);
    PathBuf::from(name)
}
