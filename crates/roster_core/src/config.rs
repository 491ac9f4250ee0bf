//! Startup configuration sourced from the environment.
//!
//! # Responsibility
//! - Resolve store location and logging settings once at process start.
//!
//! # Invariants
//! - Configuration is read, never watched; a change requires a restart.
//! - Table names are fixed by the migration-owned schema and are not
//!   configurable.

use std::env;
use std::path::PathBuf;

const ENV_DB_PATH: &str = "ROSTER_DB_PATH";
const ENV_LOG_LEVEL: &str = "ROSTER_LOG_LEVEL";
const ENV_LOG_DIR: &str = "ROSTER_LOG_DIR";

const DEFAULT_DB_PATH: &str = "roster.db";

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file location.
    pub db_path: PathBuf,
    /// Log level passed to the logging bootstrap.
    pub log_level: String,
    /// Log directory; `None` leaves file logging disabled.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Reads configuration from `ROSTER_*` environment variables, falling
    /// back to defaults for anything unset or blank.
    pub fn from_env() -> Self {
        Self {
            db_path: non_blank(ENV_DB_PATH)
                .map_or_else(|| PathBuf::from(DEFAULT_DB_PATH), PathBuf::from),
            log_level: non_blank(ENV_LOG_LEVEL)
                .unwrap_or_else(|| crate::logging::default_log_level().to_string()),
            log_dir: non_blank(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}

fn non_blank(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}
