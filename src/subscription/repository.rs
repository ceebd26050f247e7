use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::SubscriptionRecord;
use crate::shared::AppError;

/// Trait for subscription repository operations
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Number of subscriptions held on the given room
    async fn count_by_room_id(&self, room_id: &str) -> Result<u64, AppError>;
}

/// In-memory implementation of SubscriptionRepository for development and testing
pub struct InMemorySubscriptionRepository {
    subscriptions: RwLock<Vec<SubscriptionRecord>>,
}

impl Default for InMemorySubscriptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
        }
    }

    pub fn with_subscriptions(subscriptions: Vec<SubscriptionRecord>) -> Self {
        Self {
            subscriptions: RwLock::new(subscriptions),
        }
    }

    pub async fn insert(&self, subscription: SubscriptionRecord) {
        debug!(
            subscription_id = %subscription.id,
            room_id = %subscription.room_id,
            user_id = %subscription.user_id,
            "Adding subscription in memory"
        );
        self.subscriptions.write().await.push(subscription);
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    #[instrument(skip(self))]
    async fn count_by_room_id(&self, room_id: &str) -> Result<u64, AppError> {
        let count = self
            .subscriptions
            .read()
            .await
            .iter()
            .filter(|s| s.room_id == room_id)
            .count() as u64;

        debug!(room_id = %room_id, count, "Counted subscriptions in memory");
        Ok(count)
    }
}
