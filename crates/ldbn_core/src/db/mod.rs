//! SQLite storage bootstrap.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the data-access layer.
//! - Verify connectivity before a connection is handed to repositories.
//! - Provide the table definitions repositories query against.
//!
//! # Invariants
//! - A connection returned by `open_db*` has answered a ping.
//! - Foreign-key enforcement is opt-in for file stores (`OpenOptions`).

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory, open_db_with, ping, OpenOptions};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-level failure: the store could not be opened or queried.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The connection opened but did not answer `SELECT 1`.
    PingFailed(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::PingFailed(err) => write!(f, "database ping failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::PingFailed(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
