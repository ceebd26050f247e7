use serde::{Deserialize, Serialize};

/// A room as stored by the room repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: String,
    #[serde(rename = "t")]
    pub room_type: String, // Identifier of the room type, e.g. "c", "p", "d"
    pub name: Option<String>,
    pub fname: Option<String>, // Friendly name, preferred over `name` for display
    pub topic: Option<String>,
    #[serde(default)]
    pub uids: Vec<String>, // Member user ids
    #[serde(default)]
    pub usernames: Vec<String>,
    #[serde(default)]
    pub broadcast: bool,
    #[serde(default, rename = "ro")]
    pub read_only: bool,
    pub prid: Option<String>, // Parent room id for discussions
}

impl RoomRecord {
    pub fn new(id: &str, room_type: &str) -> Self {
        Self {
            id: id.to_string(),
            room_type: room_type.to_string(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_fname(mut self, fname: &str) -> Self {
        self.fname = Some(fname.to_string());
        self
    }

    pub fn with_members(mut self, members: &[(&str, &str)]) -> Self {
        self.uids = members.iter().map(|(id, _)| id.to_string()).collect();
        self.usernames = members.iter().map(|(_, name)| name.to_string()).collect();
        self
    }

    /// Friendly name if set and non-empty, otherwise the plain name
    pub fn display_name(&self) -> Option<&str> {
        self.fname
            .as_deref()
            .filter(|fname| !fname.is_empty())
            .or(self.name.as_deref())
    }

    pub fn member_count(&self) -> usize {
        self.uids.len()
    }

    pub fn is_discussion(&self) -> bool {
        self.prid.is_some()
    }
}

/// A chat message, as seen by room type hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    #[serde(rename = "rid")]
    pub room_id: String,
    pub sender_id: String,
    pub text: String,
}

/// Descriptor of a request to read an uploaded file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadAccess {
    pub file_id: String,
    #[serde(rename = "rid")]
    pub room_id: Option<String>,
    pub user_id: Option<String>,
    pub token: Option<String>,
}
