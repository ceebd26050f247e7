use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::UserRecord;
use crate::shared::AppError;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_one_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, AppError>;
}

/// In-memory implementation of UserRepository for development and testing
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated users
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let user_map = users.into_iter().map(|u| (u.id.clone(), u)).collect();

        Self {
            users: RwLock::new(user_map),
        }
    }

    pub async fn insert(&self, user: UserRecord) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            warn!(user_id = %user.id, "User already exists in memory");
            return Err(AppError::DatabaseError("User already exists".to_string()));
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_one_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, AppError> {
        let user = self.users.read().await.get(user_id).cloned();

        match &user {
            Some(u) => debug!(user_id = %user_id, username = %u.username, "User found in memory"),
            None => debug!(user_id = %user_id, "User not found in memory"),
        }

        Ok(user)
    }
}
