//! Candidate file discovery.

use crate::config::CleanerConfig;
use crate::error::{Result, SweeperError};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Version control directories that are never walked into.
const VCS_DIRS: &[&str] = &[".git", ".svn", ".hg", "CVS", "_darcs", ".bzr"];

/// Options for discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Extensions (without the dot) a file must have during a directory walk.
    pub extensions: HashSet<String>,
    /// Directory names excluded at any depth below the root.
    pub excluded_dirs: HashSet<String>,
    /// Whether dot-files and dot-directories are walked.
    pub include_hidden: bool,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self::from(&CleanerConfig::default())
    }
}

impl From<&CleanerConfig> for DiscoveryOptions {
    fn from(config: &CleanerConfig) -> Self {
        Self {
            extensions: config.extensions.iter().cloned().collect(),
            excluded_dirs: config.excluded_dirs.iter().cloned().collect(),
            include_hidden: config.include_hidden,
            follow_symlinks: config.follow_symlinks,
        }
    }
}

/// Resolves a user-supplied path into the files to clean.
pub struct FileDiscovery {
    options: DiscoveryOptions,
}

impl FileDiscovery {
    /// Create a new discovery with the given options.
    pub fn new(options: DiscoveryOptions) -> Self {
        Self { options }
    }

    /// Collect the candidate files under `root`.
    ///
    /// A file root is returned as-is, whatever its extension. A directory root
    /// is walked recursively and filtered by [`FileDiscovery::is_candidate`].
    /// Paths are canonicalized for reporting, so a symlinked file is reported
    /// (and cleaned) as its target.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(SweeperError::PathNotFound(root.to_path_buf()));
        }

        let root = root.canonicalize().map_err(|source| SweeperError::Read {
            path: root.to_path_buf(),
            source,
        })?;

        if root.is_file() {
            return Ok(vec![root]);
        }

        let walker = WalkDir::new(&root)
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || self.should_visit(entry));

        let mut files = Vec::new();
        let mut seen = HashSet::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            // Symlinks to files are kept; symlinked directories are only
            // entered when following links.
            let is_symlinked_file = entry.path_is_symlink() && entry.path().is_file();
            if !entry.file_type().is_file() && !is_symlinked_file {
                continue;
            }

            let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            if !self.is_candidate(relative) {
                continue;
            }

            let path = if entry.path_is_symlink() {
                match entry.path().canonicalize() {
                    Ok(target) => target,
                    Err(e) => {
                        tracing::warn!("Skipping broken link {}: {}", entry.path().display(), e);
                        continue;
                    }
                }
            } else {
                entry.into_path()
            };

            // A link and its target may both be in the tree
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }

        tracing::debug!(count = files.len(), root = %root.display(), "Discovered files");
        Ok(files)
    }

    /// Whether a path (relative to the walk root) is eligible for cleaning.
    ///
    /// True when the extension is allowed and no component is an excluded
    /// directory name.
    pub fn is_candidate(&self, relative: &Path) -> bool {
        self.has_allowed_extension(relative) && !self.has_excluded_component(relative)
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.options.extensions.contains(ext))
    }

    fn has_excluded_component(&self, path: &Path) -> bool {
        let parent = path.parent().unwrap_or(Path::new(""));
        parent.components().any(|component| {
            if let Component::Normal(name) = component {
                let name = name.to_string_lossy();
                self.options.excluded_dirs.contains(&*name)
            } else {
                false
            }
        })
    }

    /// Prune excluded, hidden and VCS directories before descending.
    fn should_visit(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();

        if !self.options.include_hidden && name.starts_with('.') {
            return false;
        }

        if entry.file_type().is_dir()
            && (VCS_DIRS.contains(&&*name) || self.options.excluded_dirs.contains(&*name))
        {
            return false;
        }

        true
    }
}
