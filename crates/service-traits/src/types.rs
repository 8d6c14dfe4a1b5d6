//! Domain entities and their creation inputs.
//!
//! Wire names are camelCase throughout. The `patchable!` tables below are the
//! update-input schema: anything not listed (notably `id`) cannot be patched.

use {
    serde::{Deserialize, Serialize},
    vidgraph_patch::patchable,
};

use crate::timestamp::Timestamp;

// ── Users ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub profile: Profile,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub profile: Profile,
}

patchable! {
    User {
        "name" => name: String as "String!",
        "email" => email: String as "String!",
        "age" => age: Option<i32> as "Int",
        #[nested] "profile" => profile: Profile,
        #[scalar] "createdAt" => created_at: Timestamp,
    }
}

patchable! {
    Profile {
        "bio" => bio: Option<String> as "String",
        "avatarUrl" => avatar_url: Option<String> as "String",
    }
}

// ── Videos ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    /// Short public key, unique across videos.
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub uploader_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub uploader_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

patchable! {
    Video {
        "key" => key: String as "String!",
        "title" => title: String as "String!",
        "description" => description: Option<String> as "String",
        "uploaderId" => uploader_id: String as "ID!",
        "tags" => tags: Vec<String> as "[String!]",
        #[scalar] "createdAt" => created_at: Timestamp,
    }
}
