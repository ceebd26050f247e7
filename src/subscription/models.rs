use serde::{Deserialize, Serialize};

/// A user's membership record in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: String,
    #[serde(rename = "rid")]
    pub room_id: String,
    #[serde(rename = "u")]
    pub user_id: String,
    pub name: Option<String>, // Room name as seen by this subscriber
}

impl SubscriptionRecord {
    pub fn new(id: &str, room_id: &str, user_id: &str) -> Self {
        Self {
            id: id.to_string(),
            room_id: room_id.to_string(),
            user_id: user_id.to_string(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
