/// Caller environment for room type operations that behave differently on
/// the server or depend on who is asking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    pub is_server: bool,
    pub actor_id: Option<String>,
}

impl CallContext {
    /// Server-side call with no acting user
    pub fn server() -> Self {
        Self {
            is_server: true,
            actor_id: None,
        }
    }

    /// Client-side call with no acting user
    pub fn client() -> Self {
        Self::default()
    }

    pub fn with_actor(mut self, actor_id: &str) -> Self {
        self.actor_id = Some(actor_id.to_string());
        self
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }
}
