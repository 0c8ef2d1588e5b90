//! User use-case service.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;
use crate::service::{ServiceError, ServiceResult};

/// Use-case service wrapper for user reads.
pub struct UserService<U: UserRepository> {
    repo: U,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repo: U) -> Self {
        Self { repo }
    }

    /// Lists users, optionally restricted to active ones.
    pub fn list_users(&self, active_only: bool) -> RepoResult<Vec<User>> {
        if active_only {
            self.repo.select_active_users()
        } else {
            self.repo.select_all_users()
        }
    }

    pub fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        self.repo.select_user_by_id(id)
    }

    /// Gets a user that must exist, e.g. the author of a new assignment.
    pub fn require_user(&self, id: UserId) -> ServiceResult<User> {
        self.repo
            .select_user_by_id(id)?
            .ok_or(ServiceError::NotFound { entity: "user", id })
    }
}
