//! Assignment domain model.
//!
//! # Responsibility
//! - Define the assignment record and its author link.
//! - Validate caller-supplied assignments before any SQL mutation.
//!
//! # Invariants
//! - Writes require non-empty `name` and `xml`.
//! - Writes require an author with a positive id.
//! - Updates additionally require a positive assignment id.

use crate::model::user::{User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned assignment identifier (`assignment.id`).
pub type AssignmentId = i64;

/// A piece of work authored by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// `0` until the assignment has been inserted.
    pub id: AssignmentId,
    pub name: String,
    /// Set by the store; `None` for assignments not read back yet.
    pub modified_on: Option<DateTime<Utc>>,
    /// Serialized assignment content. Empty when a listing skipped the column.
    pub xml: String,
    /// Always populated on reads by joining `user`.
    pub author: Option<User>,
}

/// Validation failures for assignment writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentValidationError {
    InvalidId(AssignmentId),
    EmptyName,
    EmptyXml,
    MissingAuthor,
    InvalidAuthorId(UserId),
}

impl Display for AssignmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "assignment id must be positive, got {id}"),
            Self::EmptyName => write!(f, "assignment name cannot be empty"),
            Self::EmptyXml => write!(f, "assignment xml cannot be empty"),
            Self::MissingAuthor => write!(f, "assignment author is required"),
            Self::InvalidAuthorId(id) => {
                write!(f, "assignment author id must be positive, got {id}")
            }
        }
    }
}

impl Error for AssignmentValidationError {}

impl Assignment {
    /// Creates an unsaved assignment for the given author.
    pub fn new(name: impl Into<String>, xml: impl Into<String>, author: User) -> Self {
        Self {
            id: 0,
            name: name.into(),
            modified_on: None,
            xml: xml.into(),
            author: Some(author),
        }
    }

    /// Returns the author id, or `None` when no author is attached.
    pub fn author_id(&self) -> Option<UserId> {
        self.author.as_ref().map(|author| author.id)
    }

    /// Checks the fields required by an insert and returns the author id.
    pub fn validate_for_insert(&self) -> Result<UserId, AssignmentValidationError> {
        if self.name.is_empty() {
            return Err(AssignmentValidationError::EmptyName);
        }
        if self.xml.is_empty() {
            return Err(AssignmentValidationError::EmptyXml);
        }
        match self.author_id() {
            None => Err(AssignmentValidationError::MissingAuthor),
            Some(id) if id <= 0 => Err(AssignmentValidationError::InvalidAuthorId(id)),
            Some(id) => Ok(id),
        }
    }

    /// Checks the fields required by an update and returns the author id.
    pub fn validate_for_update(&self) -> Result<UserId, AssignmentValidationError> {
        if self.id <= 0 {
            return Err(AssignmentValidationError::InvalidId(self.id));
        }
        self.validate_for_insert()
    }
}
