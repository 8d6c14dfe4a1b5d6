//! Entity manager interfaces and the domain model they operate on.
//!
//! Resolvers only ever talk to the traits in this crate. Concrete managers
//! (in-memory, database-backed, test doubles) are plugged in through the
//! [`Services`] bundle.

pub mod dispatch;
pub mod timestamp;
pub mod types;

use std::sync::Arc;

use {async_trait::async_trait, vidgraph_patch::PatchError};

pub use {
    dispatch::patch_entity,
    timestamp::Timestamp,
    types::{NewUser, NewVideo, Profile, User, Video},
};

/// Error type returned by manager methods.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} `{id}` not found")]
    NotFound { entity: &'static str, id: String },

    #[error("invalid {entity}: {message}")]
    Validation {
        entity: &'static str,
        message: String,
    },

    #[error("{message}")]
    Conflict { message: String },

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("{message}")]
    Message { message: String },
}

impl ServiceError {
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn validation(entity: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Validation {
            entity,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn conflict(message: impl std::fmt::Display) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn message(message: impl std::fmt::Display) -> Self {
        Self::Message {
            message: message.to_string(),
        }
    }
}

impl From<String> for ServiceError {
    fn from(value: String) -> Self {
        Self::message(value)
    }
}

impl From<&str> for ServiceError {
    fn from(value: &str) -> Self {
        Self::message(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

// ── Managers ────────────────────────────────────────────────────────────────

/// Operations shared by every entity type.
#[async_trait]
pub trait EntityManager<E: Send + 'static>: Send + Sync {
    /// Fetch one entity. Missing ids are [`ServiceError::NotFound`].
    async fn find(&self, id: &str) -> ServiceResult<E>;
    /// Replace the stored entity with the same id.
    async fn update(&self, entity: E) -> ServiceResult<E>;
    /// Remove an entity and return it.
    async fn delete(&self, id: &str) -> ServiceResult<E>;
    async fn list(&self) -> ServiceResult<Vec<E>>;
}

#[async_trait]
pub trait UserManager: EntityManager<User> {
    async fn create(&self, input: NewUser) -> ServiceResult<User>;
}

#[async_trait]
pub trait VideoManager: EntityManager<Video> {
    async fn create(&self, input: NewVideo) -> ServiceResult<Video>;
    /// Look a video up by its public key rather than its id.
    async fn find_by_key(&self, key: &str) -> ServiceResult<Video>;
}

// ── Bundle ──────────────────────────────────────────────────────────────────

/// Manager trait objects shared by all resolvers.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserManager>,
    pub videos: Arc<dyn VideoManager>,
}
