use std::collections::HashMap;

use {
    async_trait::async_trait,
    tokio::sync::RwLock,
    tracing::{debug, info},
    vidgraph_service_traits::{
        EntityManager, NewUser, ServiceError, ServiceResult, Timestamp, User, UserManager,
    },
};

use crate::validate;

/// Users keyed by id.
#[derive(Default)]
pub struct InMemoryUserManager {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed user, keeping its id. Used for seeding.
    pub async fn insert(&self, user: User) -> ServiceResult<User> {
        validate::user(&user)?;
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(ServiceError::conflict(format!("user `{}` already exists", user.id)));
        }
        ensure_unique_email(&users, &user)?;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}

fn ensure_unique_email(users: &HashMap<String, User>, user: &User) -> ServiceResult<()> {
    match users.values().find(|u| u.id != user.id && u.email == user.email) {
        Some(other) => Err(ServiceError::conflict(format!(
            "email `{}` is already used by user `{}`",
            user.email, other.id
        ))),
        None => Ok(()),
    }
}

#[async_trait]
impl EntityManager<User> for InMemoryUserManager {
    async fn find(&self, id: &str) -> ServiceResult<User> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("user", id))
    }

    async fn update(&self, user: User) -> ServiceResult<User> {
        validate::user(&user)?;
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(ServiceError::not_found("user", user.id));
        }
        ensure_unique_email(&users, &user)?;
        users.insert(user.id.clone(), user.clone());
        debug!(id = %user.id, "user updated");
        Ok(user)
    }

    async fn delete(&self, id: &str) -> ServiceResult<User> {
        let removed = self
            .users
            .write()
            .await
            .remove(id)
            .ok_or_else(|| ServiceError::not_found("user", id))?;
        info!(id, "user deleted");
        Ok(removed)
    }

    async fn list(&self) -> ServiceResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }
}

#[async_trait]
impl UserManager for InMemoryUserManager {
    async fn create(&self, input: NewUser) -> ServiceResult<User> {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            age: input.age,
            profile: input.profile,
            created_at: Timestamp::now(),
        };
        let user = self.insert(user).await?;
        info!(id = %user.id, "user created");
        Ok(user)
    }
}
