//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Keep SQL text and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Every repository call runs exactly one SQL statement.
//! - Single-row lookups return `Ok(None)` for missing rows, never an error.
//! - Write paths validate input before touching the store.

use crate::db::DbError;
use crate::model::assignment::{AssignmentId, AssignmentValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod assignment_repo;
pub mod comment_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Caller-supplied data failed local validation; nothing was written.
    InvalidInput(AssignmentValidationError),
    /// A targeted update matched zero rows.
    NoUpdate(AssignmentId),
    /// Any other failure reported by SQLite, passed through unchanged.
    Db(DbError),
}

/// Coarse classification of [`RepoError`] for callers mapping to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NoUpdate,
    Io,
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NoUpdate(_) => ErrorKind::NoUpdate,
            Self::Db(_) => ErrorKind::Io,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Self::NoUpdate(id) => write!(f, "assignment {id} was not updated"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::NoUpdate(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<AssignmentValidationError> for RepoError {
    fn from(value: AssignmentValidationError) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
