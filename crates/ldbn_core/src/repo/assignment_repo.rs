//! Assignment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Read assignments joined with their author.
//! - Insert, update and delete assignment rows.
//!
//! # Invariants
//! - Write paths run `Assignment` validation before any SQL mutation.
//! - The column list built by `assignment_select_sql` and the decoding in
//!   `assignment_from_row` branch on the same `include_xml` flag.
//! - `delete_assignment` does not inspect the affected-row count.

use crate::model::assignment::{Assignment, AssignmentId};
use crate::repo::user_repo::{user_from_row, USER_COLUMNS};
use crate::repo::{RepoError, RepoResult};
use log::{debug, info};
use rusqlite::{params, Connection, Row};

/// Column index of the first user column in assignment joins.
const AUTHOR_OFFSET: usize = 3;
/// Column index of `a.xml` when it is selected.
const XML_INDEX: usize = AUTHOR_OFFSET + 6;

/// Repository interface for assignment CRUD operations.
pub trait AssignmentRepository {
    fn select_all_assignments(&self, include_xml: bool) -> RepoResult<Vec<Assignment>>;
    fn select_assignment_by_id(&self, id: AssignmentId) -> RepoResult<Option<Assignment>>;
    /// Stores a new assignment and returns it with the store-assigned id.
    fn insert_assignment(&self, assignment: Assignment) -> RepoResult<Assignment>;
    fn update_assignment(&self, assignment: &Assignment) -> RepoResult<()>;
    fn delete_assignment(&self, id: AssignmentId) -> RepoResult<()>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn select_all_assignments(&self, include_xml: bool) -> RepoResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(&assignment_select_sql(include_xml))?;
        let mut rows = stmt.query([])?;
        let mut assignments = Vec::new();

        while let Some(row) = rows.next()? {
            assignments.push(assignment_from_row(row, include_xml)?);
        }

        Ok(assignments)
    }

    fn select_assignment_by_id(&self, id: AssignmentId) -> RepoResult<Option<Assignment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE a.id = ?1", assignment_select_sql(true)))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(assignment_from_row(row, true)?));
        }

        Ok(None)
    }

    fn insert_assignment(&self, mut assignment: Assignment) -> RepoResult<Assignment> {
        let author_id = assignment.validate_for_insert().map_err(|err| {
            debug!("event=assignment_insert module=repo status=rejected reason={err}");
            RepoError::from(err)
        })?;

        self.conn.execute(
            "INSERT INTO assignment(user_id, name, xml) VALUES (?1, ?2, ?3);",
            params![author_id, assignment.name.as_str(), assignment.xml.as_str()],
        )?;

        assignment.id = self.conn.last_insert_rowid();
        info!(
            "event=assignment_insert module=repo status=ok assignment_id={} author_id={} xml_bytes={}",
            assignment.id,
            author_id,
            assignment.xml.len()
        );
        Ok(assignment)
    }

    fn update_assignment(&self, assignment: &Assignment) -> RepoResult<()> {
        let author_id = assignment.validate_for_update().map_err(|err| {
            debug!("event=assignment_update module=repo status=rejected reason={err}");
            RepoError::from(err)
        })?;

        let changed = self.conn.execute(
            "UPDATE assignment
             SET
                user_id = ?1,
                name = ?2,
                xml = ?3,
                modified_on = CURRENT_TIMESTAMP
             WHERE id = ?4;",
            params![
                author_id,
                assignment.name.as_str(),
                assignment.xml.as_str(),
                assignment.id,
            ],
        )?;

        if changed == 0 {
            info!(
                "event=assignment_update module=repo status=no_update assignment_id={}",
                assignment.id
            );
            return Err(RepoError::NoUpdate(assignment.id));
        }

        info!(
            "event=assignment_update module=repo status=ok assignment_id={} author_id={}",
            assignment.id, author_id
        );
        Ok(())
    }

    fn delete_assignment(&self, id: AssignmentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM assignment WHERE id = ?1;", [id])?;

        info!("event=assignment_delete module=repo status=ok assignment_id={id} rows={changed}");
        Ok(())
    }
}

fn assignment_select_sql(include_xml: bool) -> String {
    let mut sql = format!("SELECT a.id, a.name, a.modified_on, {USER_COLUMNS}");
    if include_xml {
        sql.push_str(", a.xml");
    }
    sql.push_str(" FROM assignment a JOIN user u ON u.user_id = a.user_id");
    sql
}

fn assignment_from_row(row: &Row<'_>, include_xml: bool) -> rusqlite::Result<Assignment> {
    let xml = if include_xml {
        row.get(XML_INDEX)?
    } else {
        String::new()
    };

    Ok(Assignment {
        id: row.get(0)?,
        name: row.get(1)?,
        modified_on: row.get(2)?,
        xml,
        author: Some(user_from_row(row, AUTHOR_OFFSET)?),
    })
}
