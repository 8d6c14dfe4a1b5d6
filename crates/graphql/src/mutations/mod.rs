//! GraphQL mutation resolvers.
//!
//! Create and delete pass straight through to the managers. Updates take a
//! free-form `changes` object keyed by wire field names and run it through
//! [`patch_entity`]: fetch, merge, persist.

use {
    async_graphql::{Context, ID, Object, Result},
    tracing::debug,
    vidgraph_service_traits::{self as model, patch_entity},
};

use crate::{
    error::{from_service, patch_request},
    scalars::Json,
    services,
    types::{NewUser, NewVideo, User, Video},
};

/// Root mutation type.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, input: NewUser) -> Result<User> {
        let s = services!(ctx);
        from_service(s.users.create(input.into()).await)
    }

    /// Patch a user. Only the fields present in `changes` are modified.
    async fn update_user(&self, ctx: &Context<'_>, id: ID, changes: Json) -> Result<User> {
        let s = services!(ctx);
        let changes = patch_request(changes)?;
        debug!(id = %id.as_str(), keys = ?changes.keys().collect::<Vec<_>>(), "updateUser");
        from_service(patch_entity::<model::User, _>(&*s.users, &id, &changes).await)
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let s = services!(ctx);
        from_service(s.users.delete(&id).await)
    }

    async fn create_video(&self, ctx: &Context<'_>, input: NewVideo) -> Result<Video> {
        let s = services!(ctx);
        from_service(s.videos.create(input.into()).await)
    }

    /// Patch a video. Only the fields present in `changes` are modified.
    async fn update_video(&self, ctx: &Context<'_>, id: ID, changes: Json) -> Result<Video> {
        let s = services!(ctx);
        let changes = patch_request(changes)?;
        debug!(id = %id.as_str(), keys = ?changes.keys().collect::<Vec<_>>(), "updateVideo");
        from_service(patch_entity::<model::Video, _>(&*s.videos, &id, &changes).await)
    }

    async fn delete_video(&self, ctx: &Context<'_>, id: ID) -> Result<Video> {
        let s = services!(ctx);
        from_service(s.videos.delete(&id).await)
    }
}
