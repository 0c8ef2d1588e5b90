//! Runtime configuration for opening the store and logging.
//!
//! # Responsibility
//! - Load configuration from a JSON file or string.
//! - Merge command-line/env overrides on top of file values.
//!
//! # Invariants
//! - A validated config always names a non-empty database path.

use crate::db::OpenOptions;
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default database file used when nothing else is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "ldbn.sqlite3";

/// Settings needed to open the store and start logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DalConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files; stderr when unset.
    pub log_dir: Option<PathBuf>,
    /// Enforce foreign keys on the store connection.
    pub foreign_keys: bool,
}

impl Default for DalConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            foreign_keys: false,
        }
    }
}

/// Overrides applied on top of a loaded config; `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub foreign_keys: Option<bool>,
}

/// Configuration load and validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    EmptyDbPath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::EmptyDbPath => write!(f, "db_path cannot be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::EmptyDbPath => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl DalConfig {
    /// Parses a JSON config; missing keys fall back to defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Returns a copy with every `Some` override applied, then validates it.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(db_path) = overrides.db_path {
            self.db_path = db_path;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        if overrides.log_dir.is_some() {
            self.log_dir = overrides.log_dir;
        }
        if let Some(foreign_keys) = overrides.foreign_keys {
            self.foreign_keys = foreign_keys;
        }
        self.validate()?;
        Ok(self)
    }

    /// Connection settings for `open_db_with`.
    pub fn open_options(&self) -> OpenOptions {
        OpenOptions {
            foreign_keys: self.foreign_keys,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        Ok(())
    }
}
