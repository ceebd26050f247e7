use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::shared::AppError;

/// Permission checks against the authorization engine
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// Whether `actor_id` holds `permission`, optionally scoped to a room
    async fn has_permission(
        &self,
        actor_id: &str,
        permission: &str,
        scope: Option<&str>,
    ) -> Result<bool, AppError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Grant {
    actor_id: String,
    permission: String,
    scope: Option<String>,
}

/// In-memory implementation of AuthorizationService for development and testing
///
/// A grant without a scope applies to every scope. A scoped grant only
/// applies to checks made with that exact scope.
pub struct InMemoryAuthorizationService {
    grants: RwLock<HashSet<Grant>>,
}

impl Default for InMemoryAuthorizationService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAuthorizationService {
    pub fn new() -> Self {
        Self {
            grants: RwLock::new(HashSet::new()),
        }
    }

    /// Grants a permission to an actor in every scope
    pub async fn grant(&self, actor_id: &str, permission: &str) {
        self.insert(actor_id, permission, None).await;
    }

    /// Grants a permission to an actor within a single scope
    pub async fn grant_scoped(&self, actor_id: &str, permission: &str, scope: &str) {
        self.insert(actor_id, permission, Some(scope)).await;
    }

    pub async fn revoke(&self, actor_id: &str, permission: &str) {
        self.grants
            .write()
            .await
            .retain(|g| !(g.actor_id == actor_id && g.permission == permission));
    }

    async fn insert(&self, actor_id: &str, permission: &str, scope: Option<&str>) {
        info!(actor_id = %actor_id, permission = %permission, scope = ?scope, "Granting permission");

        self.grants.write().await.insert(Grant {
            actor_id: actor_id.to_string(),
            permission: permission.to_string(),
            scope: scope.map(str::to_string),
        });
    }
}

#[async_trait]
impl AuthorizationService for InMemoryAuthorizationService {
    #[instrument(skip(self))]
    async fn has_permission(
        &self,
        actor_id: &str,
        permission: &str,
        scope: Option<&str>,
    ) -> Result<bool, AppError> {
        let grants = self.grants.read().await;
        let allowed = grants.iter().any(|g| {
            g.actor_id == actor_id
                && g.permission == permission
                && match (&g.scope, scope) {
                    (None, _) => true,
                    (Some(granted), Some(requested)) => granted == requested,
                    (Some(_), None) => false,
                }
        });

        debug!(actor_id = %actor_id, permission = %permission, allowed, "Permission check");
        Ok(allowed)
    }
}
