//! User settings for StoryCash
//!
//! Stored as `config.json` in the base directory. Every field has a default,
//! so a partial or older file still loads.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::StoryCashPaths;
use crate::error::StoryCashError;
use crate::storage::write_json_atomic;

/// User settings for StoryCash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Remote tips endpoint; tips come from cache and the bundled list when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips_url: Option<String>,

    /// Upper bound on a remote tips request
    #[serde(default = "default_tips_timeout_secs")]
    pub tips_timeout_secs: u64,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Rows shown by `list` when no limit is given
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tips_timeout_secs() -> u64 {
    12
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tips_url: None,
            tips_timeout_secs: default_tips_timeout_secs(),
            currency_symbol: default_currency(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    pub fn tips_timeout(&self) -> Duration {
        Duration::from_secs(self.tips_timeout_secs)
    }

    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &StoryCashPaths) -> Result<Self, StoryCashError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                StoryCashError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StoryCashError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StoryCashPaths) -> Result<(), StoryCashError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
