use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cleaner: CleanerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Path scanned when `--path` is not given
    pub default_path: PathBuf,
    /// File extensions eligible during a directory walk (without the dot)
    pub extensions: Vec<String>,
    /// Directory names skipped at any depth
    pub excluded_dirs: Vec<String>,
    /// Walk into dot-files and dot-directories
    pub include_hidden: bool,
    /// Follow symbolic links while walking
    pub follow_symlinks: bool,
    /// Always back up files before overwriting them
    pub backup: bool,
    /// Parallel clean jobs
    pub jobs: usize,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("app"),
            extensions: ["php", "js", "ts", "vue", "jsx", "tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_dirs: ["vendor", "node_modules", "storage"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include_hidden: false,
            follow_symlinks: false,
            backup: false,
            jobs: 1,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Location of the per-user config file, if a config dir is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("debug-sweeper").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cleaner = &self.cleaner;

        if cleaner.extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "cleaner.extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = cleaner.extensions.iter().find(|e| e.starts_with('.')) {
            return Err(ConfigError::Invalid(format!(
                "extension '{}' must be given without a leading dot",
                ext
            )));
        }
        if cleaner.jobs == 0 {
            return Err(ConfigError::Invalid(
                "cleaner.jobs must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
