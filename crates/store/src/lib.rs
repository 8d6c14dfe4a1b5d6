//! In-memory entity managers.
//!
//! Backs the GraphQL layer for local runs and tests. Records live in
//! `RwLock`-guarded maps; validation and key uniqueness are enforced on every
//! write, so the managers behave like a real store from the resolvers' side.

pub mod error;
pub mod seed;
pub mod users;
pub mod videos;
mod validate;

use std::sync::Arc;

use vidgraph_service_traits::Services;

pub use {
    error::{Error, Result},
    seed::Seed,
    users::InMemoryUserManager,
    videos::InMemoryVideoManager,
};

/// Both managers wired together.
pub struct InMemoryStore {
    pub users: Arc<InMemoryUserManager>,
    pub videos: Arc<InMemoryVideoManager>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserManager::new());
        let videos = Arc::new(InMemoryVideoManager::new(users.clone()));
        Self { users, videos }
    }

    /// The service bundle handed to the GraphQL schema.
    #[must_use]
    pub fn services(&self) -> Arc<Services> {
        Arc::new(Services {
            users: self.users.clone(),
            videos: self.videos.clone(),
        })
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
