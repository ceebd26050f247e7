use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::RoomRecord;
use crate::shared::AppError;

/// Trait for room repository operations
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_one_by_id(&self, room_id: &str) -> Result<Option<RoomRecord>, AppError>;
}

/// In-memory implementation of RoomRepository for development and testing
pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<String, RoomRecord>>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated rooms
    pub fn with_rooms(rooms: Vec<RoomRecord>) -> Self {
        let room_map = rooms.into_iter().map(|r| (r.id.clone(), r)).collect();

        Self {
            rooms: RwLock::new(room_map),
        }
    }

    #[instrument(skip(self, room))]
    pub async fn insert(&self, room: RoomRecord) -> Result<(), AppError> {
        debug!(room_id = %room.id, room_type = %room.room_type, "Creating room in memory");

        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room.id) {
            warn!(room_id = %room.id, "Room already exists in memory");
            return Err(AppError::DatabaseError("Room already exists".to_string()));
        }
        rooms.insert(room.id.clone(), room);
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self))]
    async fn find_one_by_id(&self, room_id: &str) -> Result<Option<RoomRecord>, AppError> {
        debug!(room_id = %room_id, "Fetching room from memory");

        let room = self.rooms.read().await.get(room_id).cloned();

        match &room {
            Some(r) => {
                debug!(room_id = %room_id, room_type = %r.room_type, "Room found in memory")
            }
            None => debug!(room_id = %room_id, "Room not found in memory"),
        }

        Ok(room)
    }
}
