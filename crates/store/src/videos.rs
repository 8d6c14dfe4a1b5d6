use std::{collections::HashMap, sync::Arc};

use {
    async_trait::async_trait,
    tokio::sync::RwLock,
    tracing::{debug, info},
    vidgraph_service_traits::{
        EntityManager, NewVideo, ServiceError, ServiceResult, Timestamp, UserManager, Video,
        VideoManager,
    },
};

use crate::validate;

/// Videos keyed by id. Uploaders are checked against the user manager.
pub struct InMemoryVideoManager {
    videos: RwLock<HashMap<String, Video>>,
    users: Arc<dyn UserManager>,
}

impl InMemoryVideoManager {
    #[must_use]
    pub fn new(users: Arc<dyn UserManager>) -> Self {
        Self {
            videos: RwLock::new(HashMap::new()),
            users,
        }
    }

    /// Insert a fully formed video, keeping its id. Used for seeding.
    pub async fn insert(&self, video: Video) -> ServiceResult<Video> {
        self.check(&video).await?;
        let mut videos = self.videos.write().await;
        if videos.contains_key(&video.id) {
            return Err(ServiceError::conflict(format!("video `{}` already exists", video.id)));
        }
        ensure_unique_key(&videos, &video)?;
        videos.insert(video.id.clone(), video.clone());
        Ok(video)
    }

    async fn check(&self, video: &Video) -> ServiceResult<()> {
        validate::video(video)?;
        match self.users.find(&video.uploader_id).await {
            Ok(_) => Ok(()),
            Err(ServiceError::NotFound { .. }) => Err(ServiceError::validation(
                "video",
                format!("uploader `{}` does not exist", video.uploader_id),
            )),
            Err(e) => Err(e),
        }
    }
}

fn ensure_unique_key(videos: &HashMap<String, Video>, video: &Video) -> ServiceResult<()> {
    match videos.values().find(|v| v.id != video.id && v.key == video.key) {
        Some(other) => Err(ServiceError::conflict(format!(
            "video key `{}` is already used by video `{}`",
            video.key, other.id
        ))),
        None => Ok(()),
    }
}

#[async_trait]
impl EntityManager<Video> for InMemoryVideoManager {
    async fn find(&self, id: &str) -> ServiceResult<Video> {
        self.videos
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("video", id))
    }

    async fn update(&self, video: Video) -> ServiceResult<Video> {
        self.check(&video).await?;
        let mut videos = self.videos.write().await;
        if !videos.contains_key(&video.id) {
            return Err(ServiceError::not_found("video", video.id));
        }
        ensure_unique_key(&videos, &video)?;
        videos.insert(video.id.clone(), video.clone());
        debug!(id = %video.id, key = %video.key, "video updated");
        Ok(video)
    }

    async fn delete(&self, id: &str) -> ServiceResult<Video> {
        let removed = self
            .videos
            .write()
            .await
            .remove(id)
            .ok_or_else(|| ServiceError::not_found("video", id))?;
        info!(id, key = %removed.key, "video deleted");
        Ok(removed)
    }

    async fn list(&self) -> ServiceResult<Vec<Video>> {
        let mut videos: Vec<Video> = self.videos.read().await.values().cloned().collect();
        videos.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(videos)
    }
}

#[async_trait]
impl VideoManager for InMemoryVideoManager {
    async fn create(&self, input: NewVideo) -> ServiceResult<Video> {
        let video = Video {
            id: uuid::Uuid::new_v4().to_string(),
            key: input.key,
            title: input.title,
            description: input.description,
            uploader_id: input.uploader_id,
            tags: input.tags,
            created_at: Timestamp::now(),
        };
        let video = self.insert(video).await?;
        info!(id = %video.id, key = %video.key, "video created");
        Ok(video)
    }

    async fn find_by_key(&self, key: &str) -> ServiceResult<Video> {
        self.videos
            .read()
            .await
            .values()
            .find(|v| v.key == key)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("video", key))
    }
}
