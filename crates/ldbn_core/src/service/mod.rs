//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Turn absent rows into `NotFound` where a caller requires the entity.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Services stay storage-agnostic; they only see repository traits.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod assignment_service;
pub mod user_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for use-cases that require an entity to exist.
#[derive(Debug)]
pub enum ServiceError {
    /// The requested entity does not exist.
    NotFound { entity: &'static str, id: i64 },
    /// Persistence-layer failure, unchanged.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
