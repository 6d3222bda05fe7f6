//! Path management for StoryCash
//!
//! ## Path Resolution Order
//!
//! 1. `STORYCASH_DATA_DIR` environment variable (if set)
//! 2. The platform data directory from `directories::ProjectDirs`
//! 3. `~/.storycash`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::StoryCashError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "STORYCASH_DATA_DIR";

/// Manages all paths used by StoryCash
#[derive(Debug, Clone)]
pub struct StoryCashPaths {
    base_dir: PathBuf,
}

impl StoryCashPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, StoryCashError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the ledger and the tips cache
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default target directory for CSV exports
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("app_data.json")
    }

    pub fn tips_cache_file(&self) -> PathBuf {
        self.data_dir().join("tips_cache.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), StoryCashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StoryCashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| StoryCashError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, StoryCashError> {
    if let Some(dirs) = ProjectDirs::from("", "", "storycash") {
        return Ok(dirs.data_dir().to_path_buf());
    }

    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".storycash"))
        .map_err(|_| StoryCashError::Config("Could not determine a home directory".into()))
}
