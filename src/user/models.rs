use serde::{Deserialize, Serialize};

/// A user as stored by the user repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub name: Option<String>, // Real name, when the user has set one
}

impl UserRecord {
    pub fn new(id: &str, username: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Name to show for this user, honouring the real-name preference.
    /// Falls back to the username when no real name is set.
    pub fn display_name(&self, use_real_name: bool) -> &str {
        match (&self.name, use_real_name) {
            (Some(name), true) => name.as_str(),
            _ => self.username.as_str(),
        }
    }
}
