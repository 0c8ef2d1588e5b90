//! User repository contract and SQLite implementation.
//!
//! # Invariants
//! - Listings carry no `ORDER BY`; rows come back in store scan order.
//! - `USER_COLUMNS` and `user_from_row` are kept in lockstep; joins in other
//!   repositories reuse both.

use crate::model::user::{User, UserId};
use crate::repo::RepoResult;
use rusqlite::{Connection, Row};

/// User columns as selected through the `u` alias in join queries.
pub(crate) const USER_COLUMNS: &str =
    "u.user_id, u.name, u.email, u.is_active, u.is_admin, u.is_su";

const USER_SELECT_SQL: &str = "SELECT user_id, name, email, is_active, is_admin, is_su FROM user";

/// Repository interface for user reads.
pub trait UserRepository {
    fn select_all_users(&self) -> RepoResult<Vec<User>>;
    fn select_active_users(&self) -> RepoResult<Vec<User>>;
    fn select_user_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_users(&self, sql: &str) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(user_from_row(row, 0)?);
        }

        Ok(users)
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn select_all_users(&self) -> RepoResult<Vec<User>> {
        self.query_users(USER_SELECT_SQL)
    }

    fn select_active_users(&self) -> RepoResult<Vec<User>> {
        self.query_users(&format!("{USER_SELECT_SQL} WHERE is_active = 1"))
    }

    fn select_user_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE user_id = ?1"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(user_from_row(row, 0)?));
        }

        Ok(None)
    }
}

/// Decodes the six user columns starting at `offset`.
pub(crate) fn user_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        email: row.get(offset + 2)?,
        active: row.get(offset + 3)?,
        admin: row.get(offset + 4)?,
        su: row.get(offset + 5)?,
    })
}
