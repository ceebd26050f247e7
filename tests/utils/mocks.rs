use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use room_types::{
    authorization::AuthorizationService,
    room::{RoomRecord, RoomRepository},
    user::{UserRecord, UserRepository},
    AppError,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// A single permission check as seen by the authorization service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCall {
    pub actor_id: String,
    pub permission: String,
    pub scope: Option<String>,
}

/// Authorization service that answers from a fixed set of permission names
/// and records every check it receives
#[derive(Clone)]
pub struct RecordingAuthorizationService {
    allowed: Arc<HashSet<String>>,
    calls: Arc<RwLock<Vec<PermissionCall>>>,
}

impl RecordingAuthorizationService {
    pub fn allowing(permissions: &[&str]) -> Self {
        Self {
            allowed: Arc::new(permissions.iter().map(|p| p.to_string()).collect()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn calls(&self) -> Vec<PermissionCall> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl AuthorizationService for RecordingAuthorizationService {
    async fn has_permission(
        &self,
        actor_id: &str,
        permission: &str,
        scope: Option<&str>,
    ) -> Result<bool, AppError> {
        self.calls.write().await.push(PermissionCall {
            actor_id: actor_id.to_string(),
            permission: permission.to_string(),
            scope: scope.map(str::to_string),
        });

        Ok(self.allowed.contains(permission))
    }
}

/// Room repository whose backing store is unavailable
pub struct FailingRoomRepository;

#[async_trait]
impl RoomRepository for FailingRoomRepository {
    async fn find_one_by_id(&self, _room_id: &str) -> Result<Option<RoomRecord>, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}

/// User repository whose backing store is unavailable
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_one_by_id(&self, _user_id: &str) -> Result<Option<UserRecord>, AppError> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}
