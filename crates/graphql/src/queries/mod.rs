//! GraphQL query resolvers.
//!
//! Each resolver is a direct passthrough to an entity manager.

use async_graphql::{Context, ID, Object, Result};

use crate::{
    error::{from_service, from_service_list},
    services,
    types::{User, Video},
};

/// Root query type.
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users, oldest first.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let s = services!(ctx);
        from_service_list(s.users.list().await)
    }

    /// A single user by id.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let s = services!(ctx);
        from_service(s.users.find(&id).await)
    }

    /// All videos, oldest first.
    async fn videos(&self, ctx: &Context<'_>) -> Result<Vec<Video>> {
        let s = services!(ctx);
        from_service_list(s.videos.list().await)
    }

    /// A single video by id.
    async fn video(&self, ctx: &Context<'_>, id: ID) -> Result<Video> {
        let s = services!(ctx);
        from_service(s.videos.find(&id).await)
    }

    /// A single video by its public key.
    async fn video_by_key(&self, ctx: &Context<'_>, key: String) -> Result<Video> {
        let s = services!(ctx);
        from_service(s.videos.find_by_key(&key).await)
    }
}
