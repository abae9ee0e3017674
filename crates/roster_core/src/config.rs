//! Runtime configuration for embedding the roster core.
//!
//! # Responsibility
//! - Collect storage and logging settings with sensible defaults.
//! - Apply `ROSTER_*` environment overrides.
//!
//! # Invariants
//! - Defaults never touch the filesystem; paths are only resolved by callers.
//! - Blank override values and unsupported log levels fall back to defaults.
//! - A configured log level is always one of `trace|debug|info|warn|error`.

use crate::logging::normalize_level;
use crate::repo::student_repo::STUDENTS_KEY;
use log::warn;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "ROSTER_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ROSTER_LOG_DIR";

/// Default database file name when no path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "roster.sqlite3";

/// Logging settings consumed by [`crate::logging::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files. `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    /// Storage key of the collection blob.
    pub storage_key: String,
    pub logging: LoggingConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            storage_key: STUDENTS_KEY.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by `lookup(name)` for each `ROSTER_*` variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            match normalize_level(&level) {
                Ok(normalized) => config.logging.level = normalized.to_string(),
                Err(err) => warn!("event=config_load module=config status=fallback {err}"),
            }
        }
        config.logging.log_dir = value(ENV_LOG_DIR).map(PathBuf::from);
        config
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
