//! GraphQL output and input types.
//!
//! Output objects wrap the domain entities from `vidgraph-service-traits` and
//! add field-level projections (video timestamps as epoch integers, the
//! uploader of a video). Input objects convert into the managers' creation
//! inputs.

use {
    async_graphql::{Context, ID, InputObject, Object, Result, SimpleObject},
    vidgraph_service_traits as model,
};

use crate::{error::from_service, scalars::Timestamp, services};

// ── Users ───────────────────────────────────────────────────────────────────

pub struct User(pub model::User);

impl From<model::User> for User {
    fn from(value: model::User) -> Self {
        Self(value)
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn age(&self) -> Option<i32> {
        self.0.age
    }

    async fn profile(&self) -> Profile {
        self.0.profile.clone().into()
    }

    /// Account creation time, RFC 3339.
    async fn created_at(&self) -> Timestamp {
        self.0.created_at.into()
    }
}

#[derive(Debug, SimpleObject)]
pub struct Profile {
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<model::Profile> for Profile {
    fn from(value: model::Profile) -> Self {
        Self {
            bio: value.bio,
            avatar_url: value.avatar_url,
        }
    }
}

// ── Videos ──────────────────────────────────────────────────────────────────

pub struct Video(pub model::Video);

impl From<model::Video> for Video {
    fn from(value: model::Video) -> Self {
        Self(value)
    }
}

#[Object]
impl Video {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn key(&self) -> &str {
        &self.0.key
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> Option<String> {
        self.0.description.clone()
    }

    async fn tags(&self) -> Vec<String> {
        self.0.tags.clone()
    }

    /// Upload time as seconds since the Unix epoch.
    async fn created_at(&self) -> i64 {
        self.0.created_at.epoch_seconds()
    }

    /// The user who uploaded the video.
    async fn uploader(&self, ctx: &Context<'_>) -> Result<User> {
        let s = services!(ctx);
        from_service(s.users.find(&self.0.uploader_id).await)
    }
}

// ── Inputs ──────────────────────────────────────────────────────────────────

#[derive(Debug, InputObject)]
pub struct ProfileInput {
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub profile: Option<ProfileInput>,
}

impl From<NewUser> for model::NewUser {
    fn from(value: NewUser) -> Self {
        Self {
            name: value.name,
            email: value.email,
            age: value.age,
            profile: value
                .profile
                .map(|p| model::Profile {
                    bio: p.bio,
                    avatar_url: p.avatar_url,
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, InputObject)]
pub struct NewVideo {
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub uploader_id: ID,
    pub tags: Option<Vec<String>>,
}

impl From<NewVideo> for model::NewVideo {
    fn from(value: NewVideo) -> Self {
        Self {
            key: value.key,
            title: value.title,
            description: value.description,
            uploader_id: value.uploader_id.0,
            tags: value.tags.unwrap_or_default(),
        }
    }
}
