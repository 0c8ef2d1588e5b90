//! Assignment use-case service.
//!
//! # Responsibility
//! - Provide assignment entry points for HTTP/CLI callers.
//! - Combine an assignment with its comments for detail views.

use crate::model::assignment::{Assignment, AssignmentId};
use crate::model::comment::Comment;
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::comment_repo::CommentRepository;
use crate::repo::RepoResult;
use crate::service::{ServiceError, ServiceResult};
use serde::Serialize;

/// Assignment together with the comments attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentDetail {
    pub assignment: Assignment,
    pub comments: Vec<Comment>,
}

/// Use-case service wrapper for assignment operations.
pub struct AssignmentService<A: AssignmentRepository, C: CommentRepository> {
    assignments: A,
    comments: C,
}

impl<A: AssignmentRepository, C: CommentRepository> AssignmentService<A, C> {
    /// Creates a service using the provided repository implementations.
    pub fn new(assignments: A, comments: C) -> Self {
        Self {
            assignments,
            comments,
        }
    }

    /// Lists all assignments; `include_xml` controls whether payloads are loaded.
    pub fn list_assignments(&self, include_xml: bool) -> RepoResult<Vec<Assignment>> {
        self.assignments.select_all_assignments(include_xml)
    }

    /// Gets one assignment, `None` when absent.
    pub fn get_assignment(&self, id: AssignmentId) -> RepoResult<Option<Assignment>> {
        self.assignments.select_assignment_by_id(id)
    }

    /// Gets one assignment with its comments.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when the assignment does not exist.
    pub fn get_assignment_detail(&self, id: AssignmentId) -> ServiceResult<AssignmentDetail> {
        let assignment = self
            .assignments
            .select_assignment_by_id(id)?
            .ok_or(ServiceError::NotFound {
                entity: "assignment",
                id,
            })?;
        let comments = self.comments.select_assignment_comments(id)?;

        Ok(AssignmentDetail {
            assignment,
            comments,
        })
    }

    /// Inserts unsaved assignments (`id == 0`) and updates the rest.
    ///
    /// Returns the stored assignment. Validation and no-update errors come
    /// back from the repository unchanged.
    pub fn save_assignment(&self, assignment: Assignment) -> RepoResult<Assignment> {
        if assignment.id == 0 {
            return self.assignments.insert_assignment(assignment);
        }

        self.assignments.update_assignment(&assignment)?;
        Ok(assignment)
    }

    /// Deletes an assignment by ID. Missing IDs are not an error.
    pub fn delete_assignment(&self, id: AssignmentId) -> RepoResult<()> {
        self.assignments.delete_assignment(id)
    }

    /// Lists the comments of one assignment.
    pub fn list_comments(&self, assignment_id: AssignmentId) -> RepoResult<Vec<Comment>> {
        self.comments.select_assignment_comments(assignment_id)
    }
}
