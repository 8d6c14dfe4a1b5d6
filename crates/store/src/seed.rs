//! Initial data loaded from a JSON file.

use std::path::Path;

use {
    serde::Deserialize,
    tracing::info,
    vidgraph_service_traits::{User, Video},
};

use crate::{
    InMemoryStore,
    error::{Error, Result},
};

/// `{ "users": [...], "videos": [...] }` using the entities' wire names.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub users: Vec<User>,
    pub videos: Vec<Video>,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl InMemoryStore {
    /// Build a store holding the seed's records. Users are inserted first so
    /// videos can reference them.
    pub async fn from_seed(seed: Seed) -> Result<Self> {
        let store = Self::new();
        let (users, videos) = (seed.users.len(), seed.videos.len());
        for user in seed.users {
            store.users.insert(user).await?;
        }
        for video in seed.videos {
            store.videos.insert(video).await?;
        }
        info!(users, videos, "store seeded");
        Ok(store)
    }
}
