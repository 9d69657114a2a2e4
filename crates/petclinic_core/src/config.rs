//! Runtime configuration for clinic core callers.
//!
//! # Responsibility
//! - Resolve database path and logging setup from the environment.
//! - Provide stable defaults when nothing is configured.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Path values are taken as raw OS strings; non-UTF-8 paths are kept.
//! - `log_level` is validated lazily by `init_logging`, not here.

use crate::logging::{default_log_level, LoggingConfig};
use log::warn;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "PETCLINIC_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "PETCLINIC_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PETCLINIC_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "petclinic.sqlite3";

/// Resolved clinic configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ClinicConfig {
    /// Builds config from `PETCLINIC_*` environment variables over defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds config from an arbitrary key lookup over defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let read = |key: &str| lookup(key).and_then(non_blank);

        let defaults = Self::default();
        let log_level = match read(LOG_LEVEL_ENV).map(OsString::into_string) {
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                warn!(
                    "event=config_read module=config status=error key={LOG_LEVEL_ENV} error_code=not_unicode"
                );
                defaults.log_level
            }
            None => defaults.log_level,
        };

        Self {
            db_path: read(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            log_level,
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from).or(defaults.log_dir),
        }
    }

    /// Returns the logging setup, or `None` when file logging is disabled.
    pub fn logging(&self) -> Option<LoggingConfig> {
        self.log_dir
            .as_ref()
            .map(|dir| LoggingConfig::new(self.log_level.clone(), dir.clone()))
    }
}

fn non_blank(value: OsString) -> Option<OsString> {
    if let Some(text) = value.to_str() {
        let trimmed = text.trim();
        return (!trimmed.is_empty()).then(|| OsString::from(trimmed));
    }
    Some(value)
}
