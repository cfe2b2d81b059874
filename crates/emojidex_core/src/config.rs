//! Runtime configuration: where the dictionary and logs live.
//!
//! # Responsibility
//! - Resolve the data file path, log directory and log level from the
//!   environment, platform directories and explicit overrides.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; the temp directory is the last fallback.

use crate::logging::default_log_level;
use std::env;
use std::path::{Path, PathBuf};

pub const DATA_PATH_ENV: &str = "EMOJIDEX_DATA_PATH";
pub const LOG_DIR_ENV: &str = "EMOJIDEX_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "EMOJIDEX_LOG_LEVEL";

const APP_DIR_NAME: &str = "emojidex";
const DATA_FILE_NAME: &str = "emojis.json";
const LOG_DIR_NAME: &str = "logs";

/// Effective settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON dictionary file.
    pub data_path: PathBuf,
    /// Directory for rotating log files.
    pub log_dir: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

/// Optional per-field settings layered over defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub data_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Reads `EMOJIDEX_DATA_PATH`, `EMOJIDEX_LOG_DIR` and `EMOJIDEX_LOG_LEVEL`.
    pub fn from_env() -> Self {
        Self {
            data_path: non_blank(env::var(DATA_PATH_ENV).ok()).map(PathBuf::from),
            log_dir: non_blank(env::var(LOG_DIR_ENV).ok()).map(PathBuf::from),
            log_level: non_blank(env::var(LOG_LEVEL_ENV).ok()),
        }
    }
}

impl AppConfig {
    /// Environment overrides on top of the platform directories.
    pub fn from_env() -> Self {
        Self::resolve(
            &ConfigOverrides::from_env(),
            dirs::data_dir().as_deref(),
            dirs::data_local_dir().as_deref(),
        )
    }

    /// Builds a config from explicit inputs.
    ///
    /// `data_base` and `local_base` stand in for the platform data
    /// directories; `None` falls back to the temp directory.
    pub fn resolve(
        overrides: &ConfigOverrides,
        data_base: Option<&Path>,
        local_base: Option<&Path>,
    ) -> Self {
        let defaults = Self {
            data_path: app_dir(data_base).join(DATA_FILE_NAME),
            log_dir: app_dir(local_base).join(LOG_DIR_NAME),
            log_level: default_log_level().to_string(),
        };
        defaults.merged_with(overrides)
    }

    /// Returns a copy where every field set in `overrides` wins.
    pub fn merged_with(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            data_path: overrides
                .data_path
                .clone()
                .unwrap_or_else(|| self.data_path.clone()),
            log_dir: overrides
                .log_dir
                .clone()
                .unwrap_or_else(|| self.log_dir.clone()),
            log_level: overrides
                .log_level
                .clone()
                .unwrap_or_else(|| self.log_level.clone()),
        }
    }
}

fn app_dir(base: Option<&Path>) -> PathBuf {
    base.map(Path::to_path_buf)
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
