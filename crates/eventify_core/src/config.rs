//! Process configuration loaded once at startup.
//!
//! # Responsibility
//! - Resolve the storage backend, database path and logging settings from
//!   the environment.
//! - Keep the parse helpers pure so they are testable without touching the
//!   process environment.
//!
//! # Invariants
//! - Configuration problems are fatal at startup; the caller fails fast
//!   with the diagnostic instead of attempting partial operation.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_BACKEND: &str = "EVENTIFY_BACKEND";
pub const ENV_DB_PATH: &str = "EVENTIFY_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "EVENTIFY_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "EVENTIFY_LOG_DIR";

const DEFAULT_SQLITE_PATH: &str = "eventify.db";
const DEFAULT_DOCUMENT_PATH: &str = "eventify.ndb";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    UnknownBackend(String),
    EmptyValue(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBackend(value) => write!(
                f,
                "unsupported storage backend `{value}`; expected sqlite|document"
            ),
            Self::EmptyValue(key) => write!(f, "environment value for {key} is empty"),
        }
    }
}

impl Error for ConfigError {}

/// Storage engine selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Relational backend: SQLite tables with a unique email column.
    Sqlite,
    /// Document backend: embedded document store with a unique email index.
    Document,
}

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: StorageBackend,
    pub db_path: PathBuf,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; set-but-invalid values are
    /// errors rather than silent fallbacks.
    pub fn from_env() -> ConfigResult<Self> {
        let backend = match env_value(ENV_BACKEND) {
            Some(raw) => parse_backend(&raw)?,
            None => StorageBackend::Sqlite,
        };
        let db_path = match env_value(ENV_DB_PATH) {
            Some(raw) => PathBuf::from(raw),
            None => default_db_path(backend),
        };
        let log_level = env_value(ENV_LOG_LEVEL);
        let log_dir = env_value(ENV_LOG_DIR).map(PathBuf::from);

        Ok(Self {
            backend,
            db_path,
            log_level,
            log_dir,
        })
    }
}

/// Parses a backend name. Case-insensitive, surrounding whitespace ignored.
pub fn parse_backend(value: &str) -> ConfigResult<StorageBackend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Err(ConfigError::EmptyValue(ENV_BACKEND)),
        "sqlite" => Ok(StorageBackend::Sqlite),
        "document" => Ok(StorageBackend::Document),
        other => Err(ConfigError::UnknownBackend(other.to_string())),
    }
}

/// Default storage file for the given backend.
pub fn default_db_path(backend: StorageBackend) -> PathBuf {
    match backend {
        StorageBackend::Sqlite => PathBuf::from(DEFAULT_SQLITE_PATH),
        StorageBackend::Document => PathBuf::from(DEFAULT_DOCUMENT_PATH),
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
