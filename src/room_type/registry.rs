use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::{config::RoomTypeConfig, route::RouteParams};
use crate::{room::RoomRecord, shared::AppError};

/// All room types known to the application, keyed by identifier.
///
/// Configured with `&mut` at start-up, then shared read-only.
#[derive(Default)]
pub struct RoomTypeRegistry {
    types: HashMap<String, Box<dyn RoomTypeConfig>>,
}

impl RoomTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: RoomTypeConfig + 'static>(&mut self, config: T) -> Result<(), AppError> {
        let identifier = config.identifier().to_string();

        if self.types.contains_key(&identifier) {
            warn!(room_type = %identifier, "Room type already registered");
            return Err(AppError::Conflict(format!(
                "Room type '{}' is already registered",
                identifier
            )));
        }

        info!(room_type = %identifier, order = config.order(), "Registering room type");
        self.types.insert(identifier, Box::new(config));
        Ok(())
    }

    pub fn get(&self, identifier: &str) -> Option<&dyn RoomTypeConfig> {
        self.types.get(identifier).map(|config| &**config)
    }

    pub fn get_mut(&mut self, identifier: &str) -> Option<&mut (dyn RoomTypeConfig + 'static)> {
        self.types.get_mut(identifier).map(|config| &mut **config)
    }

    /// Config matching the room's type
    pub fn for_room(&self, room: &RoomRecord) -> Option<&dyn RoomTypeConfig> {
        let config = self.get(&room.room_type);
        if config.is_none() {
            debug!(room_id = %room.id, room_type = %room.room_type, "Unknown room type");
        }
        config
    }

    /// Every config sorted by display order, ties broken by identifier
    pub fn ordered(&self) -> Vec<&dyn RoomTypeConfig> {
        let mut configs: Vec<&dyn RoomTypeConfig> = self.types.values().map(|c| &**c).collect();
        configs.sort_by(|a, b| {
            a.order()
                .cmp(&b.order())
                .then_with(|| a.identifier().cmp(b.identifier()))
        });
        configs
    }

    pub fn identifiers(&self) -> Vec<&str> {
        self.ordered().into_iter().map(|c| c.identifier()).collect()
    }

    /// Display name of a room according to its type
    pub fn room_name(&self, room: &RoomRecord) -> Option<String> {
        self.for_room(room)?.room_name(Some(room))
    }

    /// Link parameters for the type's route, `None` when it has no route or no links
    pub fn route_link(&self, identifier: &str, params: &RouteParams) -> Option<RouteParams> {
        self.get(identifier)?.route()?.link(params)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
