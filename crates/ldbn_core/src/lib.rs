//! Data-access layer for the LDBN assignment store.
//! Maps `user`, `assignment` and `comment` rows to domain objects.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ConfigOverrides, DalConfig};
pub use db::{open_db, open_db_in_memory, open_db_with, DbError, DbResult, OpenOptions};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignment::{Assignment, AssignmentId, AssignmentValidationError};
pub use model::comment::{Comment, CommentId};
pub use model::user::{User, UserId};
pub use repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
pub use repo::comment_repo::{CommentRepository, SqliteCommentRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{ErrorKind, RepoError, RepoResult};
pub use service::assignment_service::{AssignmentDetail, AssignmentService};
pub use service::user_service::UserService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
