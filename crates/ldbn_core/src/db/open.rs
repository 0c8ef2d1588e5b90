//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas and verify the store answers.
//!
//! # Invariants
//! - Returned connections have a busy timeout and answered a ping.
//! - File connections keep `foreign_keys=OFF` unless asked otherwise; stores
//!   created by older deployments lack `ON DELETE CASCADE` on `comment`.
//! - In-memory connections get the schema applied and `foreign_keys=ON`.

use super::schema::init_schema;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for file stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenOptions {
    /// Enforce `REFERENCES` constraints. Off by default.
    pub foreign_keys: bool,
}

/// Opens a SQLite database file with default [`OpenOptions`].
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with(path, OpenOptions::default())
}

/// Opens a SQLite database file and checks that it answers a ping.
///
/// A missing file is created by SQLite; the schema is not applied here, see
/// [`init_schema`] for bootstrapping a fresh store.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_with(path: impl AsRef<Path>, options: OpenOptions) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=file path={} foreign_keys={}",
        path.display(),
        options.foreign_keys
    );

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, "file", options, started_at, |_| Ok(()))
}

/// Opens an in-memory SQLite database with the schema applied.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    let options = OpenOptions { foreign_keys: true };
    finish_open(conn, "memory", options, started_at, init_schema)
}

/// Verifies that the connection can execute a trivial query.
pub fn ping(conn: &Connection) -> DbResult<()> {
    conn.query_row("SELECT 1;", [], |row| row.get::<_, i64>(0))
        .map(|_| ())
        .map_err(DbError::PingFailed)
}

fn finish_open(
    conn: Connection,
    mode: &str,
    options: OpenOptions,
    started_at: Instant,
    prepare: impl FnOnce(&Connection) -> DbResult<()>,
) -> DbResult<Connection> {
    let result = bootstrap_connection(&conn, options).and_then(|()| prepare(&conn));
    match result {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection, options: OpenOptions) -> DbResult<()> {
    if options.foreign_keys {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    } else {
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    }
    conn.busy_timeout(BUSY_TIMEOUT)?;
    ping(conn)
}
