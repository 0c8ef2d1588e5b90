//! Comment repository contract and SQLite implementation.

use crate::model::assignment::AssignmentId;
use crate::model::comment::Comment;
use crate::repo::user_repo::{user_from_row, USER_COLUMNS};
use crate::repo::RepoResult;
use rusqlite::{Connection, Row};

/// Column index of the first user column in comment joins.
const AUTHOR_OFFSET: usize = 4;

/// Repository interface for comment reads.
pub trait CommentRepository {
    /// Returns every comment on the assignment; empty when there are none.
    fn select_assignment_comments(&self, assignment_id: AssignmentId) -> RepoResult<Vec<Comment>>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn select_assignment_comments(&self, assignment_id: AssignmentId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT c.id, c.assignment_id, c.comment_val, c.modified_on, {USER_COLUMNS}
             FROM comment c JOIN user u ON u.user_id = c.user_id
             WHERE c.assignment_id = ?1"
        ))?;

        let mut rows = stmt.query([assignment_id])?;
        let mut comments = Vec::new();

        while let Some(row) = rows.next()? {
            comments.push(comment_from_row(row)?);
        }

        Ok(comments)
    }
}

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        assignment_id: row.get(1)?,
        comment_val: row.get(2)?,
        modified_on: row.get(3)?,
        author: Some(user_from_row(row, AUTHOR_OFFSET)?),
    })
}
