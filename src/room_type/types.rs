use serde::{Deserialize, Serialize};

use super::config::RoomTypeConfig;

/// Route portion of a room type summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub name: String,
    pub path: String,
}

/// Response describing a registered room type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeResponse {
    pub identifier: String,
    pub order: i32,
    pub icon: Option<String>,
    pub header: Option<String>,
    pub label: Option<String>,
    pub route: Option<RouteResponse>,
    pub include_in_dashboard: bool,
    pub include_in_room_search: bool,
    pub support_members_list: bool,
}

impl From<&dyn RoomTypeConfig> for RoomTypeResponse {
    fn from(config: &dyn RoomTypeConfig) -> Self {
        Self {
            identifier: config.identifier().to_string(),
            order: config.order(),
            icon: config.icon().map(str::to_string),
            header: config.header().map(str::to_string),
            label: config.label().map(str::to_string),
            route: config.route().map(|route| RouteResponse {
                name: route.name().to_string(),
                path: route.path().to_string(),
            }),
            include_in_dashboard: config.include_in_dashboard(),
            include_in_room_search: config.include_in_room_search(),
            support_members_list: config.support_members_list(),
        }
    }
}

/// Query for the creatable room types of an actor
#[derive(Debug, Deserialize)]
pub struct CreatableQuery {
    pub actor_id: Option<String>,
}
