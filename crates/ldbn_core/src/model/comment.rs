//! Comment domain model.

use crate::model::assignment::AssignmentId;
use crate::model::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned comment identifier (`comment.id`).
pub type CommentId = i64;

/// A remark attached to an assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub assignment_id: AssignmentId,
    pub comment_val: String,
    pub modified_on: Option<DateTime<Utc>>,
    /// Populated from the `user` join on reads.
    pub author: Option<User>,
}
