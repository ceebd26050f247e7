use serde_json::json;
use std::sync::Arc;

use room_types::{
    room::{InMemoryRoomRepository, RoomRecord},
    room_type::builtin,
    settings::{InMemorySettingsStore, UI_USE_REAL_NAME},
    subscription::{InMemorySubscriptionRepository, SubscriptionRecord},
    user::{InMemoryUserRepository, UserRecord},
    RoomTypeDeps, RoomTypeRegistry,
};

use super::mocks::RecordingAuthorizationService;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub registry: RoomTypeRegistry,
    pub deps: RoomTypeDeps,
    pub authorization: RecordingAuthorizationService,
    pub settings: Arc<InMemorySettingsStore>,
}

pub struct TestSetupBuilder {
    users: Vec<UserRecord>,
    rooms: Vec<RoomRecord>,
    subscriptions: Vec<SubscriptionRecord>,
    allowed_permissions: Vec<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            users: vec![],
            rooms: vec![],
            subscriptions: vec![],
            allowed_permissions: vec![],
        }
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_room(mut self, room: RoomRecord) -> Self {
        self.rooms.push(room);
        self
    }

    pub fn with_subscription(mut self, room_id: &str, user_id: &str) -> Self {
        let id = format!("sub-{}", self.subscriptions.len() + 1);
        self.subscriptions
            .push(SubscriptionRecord::new(&id, room_id, user_id));
        self
    }

    pub fn allowing(mut self, permission: &str) -> Self {
        self.allowed_permissions.push(permission.to_string());
        self
    }

    pub fn build(self) -> TestSetup {
        let allowed: Vec<&str> = self.allowed_permissions.iter().map(String::as_str).collect();
        let authorization = RecordingAuthorizationService::allowing(&allowed);
        let settings = Arc::new(InMemorySettingsStore::with_values([(
            UI_USE_REAL_NAME,
            json!(false),
        )]));

        let deps = RoomTypeDeps {
            settings: settings.clone(),
            users: Arc::new(InMemoryUserRepository::with_users(self.users)),
            rooms: Arc::new(InMemoryRoomRepository::with_rooms(self.rooms)),
            subscriptions: Arc::new(InMemorySubscriptionRepository::with_subscriptions(
                self.subscriptions,
            )),
            authorization: Arc::new(authorization.clone()),
        };

        let registry = builtin::default_registry(deps.clone())
            .expect("built-in room types should register");

        TestSetup {
            registry,
            deps,
            authorization,
            settings,
        }
    }
}
