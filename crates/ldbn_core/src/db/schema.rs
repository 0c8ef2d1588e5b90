//! Table definitions for the assignment store.
//!
//! Column names and types are shared with existing deployments and must not
//! change; repositories decode rows positionally against them.

use super::DbResult;
use log::info;
use rusqlite::Connection;

/// Idempotent DDL for the `user`, `assignment` and `comment` tables.
pub const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS user (
    user_id INTEGER PRIMARY KEY,
    name TEXT,
    email TEXT,
    is_active BOOLEAN,
    is_admin BOOLEAN,
    is_su BOOLEAN
);

CREATE TABLE IF NOT EXISTS assignment (
    id INTEGER PRIMARY KEY,
    user_id INTEGER REFERENCES user(user_id),
    name TEXT,
    modified_on TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    xml TEXT
);

CREATE TABLE IF NOT EXISTS comment (
    id INTEGER PRIMARY KEY,
    assignment_id INTEGER REFERENCES assignment(id) ON DELETE CASCADE,
    user_id INTEGER REFERENCES user(user_id),
    comment_val TEXT,
    modified_on TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
";

/// Table names created by [`init_schema`].
pub const TABLES: &[&str] = &["user", "assignment", "comment"];

/// Creates any missing table. Existing tables and rows are left untouched.
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    info!("event=schema_init module=db status=ok tables={}", TABLES.len());
    Ok(())
}
