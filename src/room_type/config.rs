use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use super::{
    constants::{RoomMemberAction, RoomSetting, UiTextContext},
    context::CallContext,
    descriptor::RoomTypeDescriptor,
    route::RoomTypeRoute,
};
use crate::{
    authorization::AuthorizationService,
    room::{MessageRecord, RoomRecord, RoomRepository, UploadAccess},
    settings::{SettingsStore, UI_USE_REAL_NAME},
    shared::AppError,
    subscription::{SubscriptionRecord, SubscriptionRepository},
    user::{UserRecord, UserRepository},
};

/// Collaborators every room type consults
#[derive(Clone)]
pub struct RoomTypeDeps {
    pub settings: Arc<dyn SettingsStore>,
    pub users: Arc<dyn UserRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub authorization: Arc<dyn AuthorizationService>,
}

/// State shared by all room type implementations: the descriptor plus the
/// injected collaborators. Only `order` can change after construction.
pub struct RoomTypeBase {
    descriptor: RoomTypeDescriptor,
    deps: RoomTypeDeps,
}

impl RoomTypeBase {
    pub fn new(descriptor: RoomTypeDescriptor, deps: RoomTypeDeps) -> Self {
        Self { descriptor, deps }
    }

    pub fn identifier(&self) -> &str {
        &self.descriptor.identifier
    }

    pub fn order(&self) -> i32 {
        self.descriptor.order
    }

    pub fn set_order(&mut self, order: i32) {
        self.descriptor.order = order;
    }

    pub fn icon(&self) -> Option<&str> {
        self.descriptor.icon.as_deref()
    }

    pub fn header(&self) -> Option<&str> {
        self.descriptor.header.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.descriptor.label.as_deref()
    }

    pub fn route(&self) -> Option<&Arc<dyn RoomTypeRoute>> {
        self.descriptor.route.as_ref()
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.deps.settings.as_ref()
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.deps.users.as_ref()
    }

    pub fn rooms(&self) -> &dyn RoomRepository {
        self.deps.rooms.as_ref()
    }

    pub fn subscriptions(&self) -> &dyn SubscriptionRepository {
        self.deps.subscriptions.as_ref()
    }

    pub fn authorization(&self) -> &dyn AuthorizationService {
        self.deps.authorization.as_ref()
    }
}

/// Payload for push and desktop notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDetails {
    pub title: String,
    pub text: String,
}

/// Behavior hooks of a room type.
///
/// Implementors provide `base`/`base_mut` and override only the hooks that
/// differ for their kind of room. Defaults never fail on their own; errors
/// only come from the injected collaborators and are passed through as-is.
#[async_trait]
pub trait RoomTypeConfig: Send + Sync {
    fn base(&self) -> &RoomTypeBase;

    fn base_mut(&mut self) -> &mut RoomTypeBase;

    /// The room type's internal identifier
    fn identifier(&self) -> &str {
        self.base().identifier()
    }

    /// Display order among room types
    fn order(&self) -> i32 {
        self.base().order()
    }

    fn set_order(&mut self, order: i32) {
        self.base_mut().set_order(order);
    }

    fn icon(&self) -> Option<&str> {
        self.base().icon()
    }

    fn header(&self) -> Option<&str> {
        self.base().header()
    }

    fn label(&self) -> Option<&str> {
        self.base().label()
    }

    fn route(&self) -> Option<&Arc<dyn RoomTypeRoute>> {
        self.base().route()
    }

    fn allow_member_action(&self, _room: &RoomRecord, _action: RoomMemberAction) -> bool {
        false
    }

    fn allow_room_setting_change(&self, _room: &RoomRecord, _setting: RoomSetting) -> bool {
        true
    }

    fn can_access_uploaded_file(&self, _access: &UploadAccess) -> bool {
        false
    }

    fn can_add_user(&self, _room: &RoomRecord) -> bool {
        false
    }

    /// Whether the acting user may create rooms of this type
    async fn can_be_created(&self, ctx: &CallContext) -> Result<bool, AppError> {
        let Some(actor_id) = ctx.actor_id() else {
            debug!(room_type = %self.identifier(), "No acting user, creation denied");
            return Ok(false);
        };

        let permission = format!("create-{}", self.identifier());
        self.base()
            .authorization()
            .has_permission(actor_id, &permission, None)
            .await
    }

    /// Whether the acting user may delete the given room
    async fn can_be_deleted(&self, ctx: &CallContext, room: &RoomRecord) -> Result<bool, AppError> {
        let Some(actor_id) = ctx.actor_id() else {
            debug!(room_id = %room.id, "No acting user, deletion denied");
            return Ok(false);
        };

        let permission = format!("delete-{}", room.room_type);
        self.base()
            .authorization()
            .has_permission(actor_id, &permission, Some(&room.id))
            .await
    }

    /// A room accepts messages once anyone is subscribed to it
    async fn can_send_message(&self, room_id: &str) -> Result<bool, AppError> {
        let count = self.base().subscriptions().count_by_room_id(room_id).await?;
        Ok(count > 0)
    }

    /// Whether this room type is available at all
    fn condition(&self) -> bool {
        true
    }

    fn enable_members_list_profile(&self) -> bool {
        false
    }

    async fn find_room(&self, room_id: &str) -> Result<Option<RoomRecord>, AppError> {
        self.base().rooms().find_one_by_id(room_id).await
    }

    fn get_avatar_path(&self, _room: &RoomRecord, _sub: Option<&SubscriptionRecord>) -> String {
        String::new()
    }

    fn get_discussion_type(&self) -> &'static str {
        "p"
    }

    fn get_icon(&self, _room: &RoomRecord) -> Option<String> {
        self.icon().map(str::to_string)
    }

    /// Full record of a message's sender. Only resolved on the server.
    async fn get_msg_sender(
        &self,
        ctx: &CallContext,
        sender_id: &str,
    ) -> Result<Option<UserRecord>, AppError> {
        if !ctx.is_server {
            return Ok(None);
        }
        self.base().users().find_one_by_id(sender_id).await
    }

    /// Title and text for a notification about `message`. Only built on the server.
    async fn get_notification_details(
        &self,
        ctx: &CallContext,
        room: &RoomRecord,
        user: &UserRecord,
        message: &str,
    ) -> Result<Option<NotificationDetails>, AppError> {
        if !ctx.is_server {
            return Ok(None);
        }

        let title = format!("#{}", self.room_name(Some(room)).unwrap_or_default());
        let use_real_name = self.base().settings().get_bool(UI_USE_REAL_NAME).await?;
        let text = format!("{}: {}", user.display_name(use_real_name), message);

        Ok(Some(NotificationDetails { title, text }))
    }

    fn get_read_receipts_extra_data(&self, _message: &MessageRecord) -> Map<String, Value> {
        Map::new()
    }

    /// Translation key for a generic UI element, empty when the type has none
    fn get_ui_text(&self, _context: UiTextContext) -> &'static str {
        ""
    }

    fn get_user_status(&self, _room_id: &str) -> String {
        String::new()
    }

    fn get_user_status_text(&self, _room_id: &str) -> String {
        String::new()
    }

    fn include_in_dashboard(&self) -> bool {
        false
    }

    fn include_in_room_search(&self) -> bool {
        false
    }

    fn is_group_chat(&self, _room: Option<&RoomRecord>) -> bool {
        false
    }

    fn is_emit_allowed(&self) -> bool {
        false
    }

    fn open_custom_profile_tab(&self, _instance: &Value, _room: &RoomRecord, _username: &str) -> bool {
        false
    }

    fn prevent_renaming(&self) -> bool {
        false
    }

    fn room_name(&self, room: Option<&RoomRecord>) -> Option<String> {
        room.and_then(RoomRecord::display_name).map(str::to_string)
    }

    fn secondary_room_name(&self, room: Option<&RoomRecord>) -> Option<String> {
        room.and_then(RoomRecord::display_name).map(str::to_string)
    }

    fn support_members_list(&self) -> bool {
        true
    }

    fn user_detail_show_all(&self) -> bool {
        true
    }

    fn user_detail_show_admin(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorization::InMemoryAuthorizationService;
    use crate::room::InMemoryRoomRepository;
    use crate::settings::InMemorySettingsStore;
    use crate::shared::test_utils::empty_deps;
    use crate::subscription::InMemorySubscriptionRepository;
    use crate::user::InMemoryUserRepository;
    use rstest::rstest;
    use serde_json::json;

    /// Room type that overrides nothing
    struct PlainRoomType {
        base: RoomTypeBase,
    }

    impl PlainRoomType {
        fn new(descriptor: RoomTypeDescriptor, deps: RoomTypeDeps) -> Self {
            Self {
                base: RoomTypeBase::new(descriptor, deps),
            }
        }
    }

    impl RoomTypeConfig for PlainRoomType {
        fn base(&self) -> &RoomTypeBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut RoomTypeBase {
            &mut self.base
        }
    }

    fn plain(identifier: &str) -> PlainRoomType {
        PlainRoomType::new(RoomTypeDescriptor::new(identifier, 5), empty_deps())
    }

    fn room() -> RoomRecord {
        RoomRecord::new("room-1", "c").with_name("general")
    }

    #[test]
    fn test_descriptor_accessors() {
        let config = PlainRoomType::new(
            RoomTypeDescriptor::new("c", 30)
                .with_icon("hashtag")
                .with_header("channels")
                .with_label("Channels"),
            empty_deps(),
        );

        assert_eq!(config.identifier(), "c");
        assert_eq!(config.order(), 30);
        assert_eq!(config.icon(), Some("hashtag"));
        assert_eq!(config.header(), Some("channels"));
        assert_eq!(config.label(), Some("Channels"));
        assert!(config.route().is_none());
    }

    #[test]
    fn test_set_order_is_observable() {
        let mut config = plain("p");
        config.set_order(12);

        assert_eq!(config.order(), 12);
        assert_eq!(config.identifier(), "p");
    }

    #[rstest]
    #[case::allow_member_action(|t: &PlainRoomType| t.allow_member_action(&room(), RoomMemberAction::Mute), false)]
    #[case::allow_room_setting_change(|t: &PlainRoomType| t.allow_room_setting_change(&room(), RoomSetting::RoomTopic), true)]
    #[case::can_access_uploaded_file(|t: &PlainRoomType| t.can_access_uploaded_file(&UploadAccess::default()), false)]
    #[case::can_add_user(|t: &PlainRoomType| t.can_add_user(&room()), false)]
    #[case::condition(|t: &PlainRoomType| t.condition(), true)]
    #[case::enable_members_list_profile(|t: &PlainRoomType| t.enable_members_list_profile(), false)]
    #[case::include_in_dashboard(|t: &PlainRoomType| t.include_in_dashboard(), false)]
    #[case::include_in_room_search(|t: &PlainRoomType| t.include_in_room_search(), false)]
    #[case::is_group_chat(|t: &PlainRoomType| t.is_group_chat(Some(&room())), false)]
    #[case::is_group_chat_without_room(|t: &PlainRoomType| t.is_group_chat(None), false)]
    #[case::is_emit_allowed(|t: &PlainRoomType| t.is_emit_allowed(), false)]
    #[case::open_custom_profile_tab(|t: &PlainRoomType| t.open_custom_profile_tab(&json!({}), &room(), "alice"), false)]
    #[case::prevent_renaming(|t: &PlainRoomType| t.prevent_renaming(), false)]
    #[case::support_members_list(|t: &PlainRoomType| t.support_members_list(), true)]
    #[case::user_detail_show_all(|t: &PlainRoomType| t.user_detail_show_all(), true)]
    #[case::user_detail_show_admin(|t: &PlainRoomType| t.user_detail_show_admin(), true)]
    fn test_default_toggles(#[case] toggle: fn(&PlainRoomType) -> bool, #[case] expected: bool) {
        assert_eq!(toggle(&plain("c")), expected);
    }

    #[test]
    fn test_default_text_hooks() {
        let config = plain("c");
        let message = MessageRecord {
            id: "m1".to_string(),
            room_id: "room-1".to_string(),
            sender_id: "u1".to_string(),
            text: "hi".to_string(),
        };

        assert_eq!(config.get_avatar_path(&room(), None), "");
        assert_eq!(config.get_discussion_type(), "p");
        assert_eq!(config.get_ui_text(UiTextContext::LeaveWarning), "");
        assert_eq!(config.get_user_status("room-1"), "");
        assert_eq!(config.get_user_status_text("room-1"), "");
        assert!(config.get_read_receipts_extra_data(&message).is_empty());
    }

    #[test]
    fn test_get_icon_defaults_to_descriptor_icon() {
        let with_icon =
            PlainRoomType::new(RoomTypeDescriptor::new("c", 1).with_icon("hashtag"), empty_deps());

        assert_eq!(with_icon.get_icon(&room()), Some("hashtag".to_string()));
        assert_eq!(plain("p").get_icon(&room()), None);
    }

    #[test]
    fn test_room_name_prefers_fname() {
        let config = plain("c");
        let named = room().with_fname("General Chat");

        assert_eq!(config.room_name(Some(&named)), Some("General Chat".to_string()));
        assert_eq!(config.room_name(Some(&room())), Some("general".to_string()));
        assert_eq!(config.room_name(None), None);
        assert_eq!(
            config.secondary_room_name(Some(&named)),
            Some("General Chat".to_string())
        );
        assert_eq!(config.secondary_room_name(None), None);
    }

    #[tokio::test]
    async fn test_can_be_created_uses_identifier_permission() {
        let authorization = Arc::new(InMemoryAuthorizationService::new());
        authorization.grant("alice", "create-p").await;
        let deps = RoomTypeDeps {
            authorization: authorization.clone(),
            ..empty_deps()
        };

        let private = PlainRoomType::new(RoomTypeDescriptor::new("p", 5), deps.clone());
        let public = PlainRoomType::new(RoomTypeDescriptor::new("c", 5), deps);
        let ctx = CallContext::server().with_actor("alice");

        assert!(private.can_be_created(&ctx).await.unwrap());
        assert!(!public.can_be_created(&ctx).await.unwrap());
        assert!(!private
            .can_be_created(&CallContext::server().with_actor("bob"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_permission_gates_deny_without_actor() {
        let authorization = Arc::new(InMemoryAuthorizationService::new());
        authorization.grant("alice", "create-p").await;
        let config = PlainRoomType::new(
            RoomTypeDescriptor::new("p", 5),
            RoomTypeDeps {
                authorization,
                ..empty_deps()
            },
        );

        assert!(!config.can_be_created(&CallContext::server()).await.unwrap());
        assert!(!config
            .can_be_deleted(&CallContext::server(), &room())
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_can_be_deleted_uses_room_type_and_scope() {
        let authorization = Arc::new(InMemoryAuthorizationService::new());
        authorization.grant_scoped("alice", "delete-c", "room-1").await;
        let config = PlainRoomType::new(
            RoomTypeDescriptor::new("p", 5),
            RoomTypeDeps {
                authorization,
                ..empty_deps()
            },
        );
        let ctx = CallContext::server().with_actor("alice");

        // Permission follows the room's own type, not the config's identifier
        assert!(config.can_be_deleted(&ctx, &room()).await.unwrap());
        assert!(!config
            .can_be_deleted(&ctx, &RoomRecord::new("room-2", "c"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_can_send_message_requires_subscription() {
        let subscriptions = Arc::new(InMemorySubscriptionRepository::with_subscriptions(vec![
            SubscriptionRecord::new("s1", "room-1", "alice"),
        ]));
        let config = PlainRoomType::new(
            RoomTypeDescriptor::new("c", 5),
            RoomTypeDeps {
                subscriptions,
                ..empty_deps()
            },
        );

        assert!(config.can_send_message("room-1").await.unwrap());
        assert!(!config.can_send_message("room-2").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_room() {
        let rooms = Arc::new(InMemoryRoomRepository::with_rooms(vec![room()]));
        let config = PlainRoomType::new(
            RoomTypeDescriptor::new("c", 5),
            RoomTypeDeps {
                rooms,
                ..empty_deps()
            },
        );

        assert_eq!(config.find_room("room-1").await.unwrap(), Some(room()));
        assert_eq!(config.find_room("room-9").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_msg_sender_only_on_server() {
        let users = Arc::new(InMemoryUserRepository::with_users(vec![UserRecord::new(
            "u1", "alice",
        )]));
        let config = PlainRoomType::new(
            RoomTypeDescriptor::new("c", 5),
            RoomTypeDeps {
                users,
                ..empty_deps()
            },
        );

        let sender = config
            .get_msg_sender(&CallContext::server(), "u1")
            .await
            .unwrap();
        assert_eq!(sender.map(|u| u.username), Some("alice".to_string()));

        let sender = config
            .get_msg_sender(&CallContext::client(), "u1")
            .await
            .unwrap();
        assert!(sender.is_none());
    }

    #[rstest]
    #[case(false, "alice: hello")]
    #[case(true, "Alice Liddell: hello")]
    #[tokio::test]
    async fn test_notification_details_on_server(
        #[case] use_real_name: bool,
        #[case] expected_text: &str,
    ) {
        let settings = Arc::new(InMemorySettingsStore::with_values([(
            UI_USE_REAL_NAME,
            json!(use_real_name),
        )]));
        let config = PlainRoomType::new(
            RoomTypeDescriptor::new("c", 5),
            RoomTypeDeps {
                settings,
                ..empty_deps()
            },
        );
        let user = UserRecord::new("u1", "alice").with_name("Alice Liddell");

        let details = config
            .get_notification_details(&CallContext::server(), &room(), &user, "hello")
            .await
            .unwrap();

        assert_eq!(
            details,
            Some(NotificationDetails {
                title: "#general".to_string(),
                text: expected_text.to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_notification_details_on_client_is_empty() {
        let config = plain("c");
        let user = UserRecord::new("u1", "alice");

        let details = config
            .get_notification_details(&CallContext::client(), &room(), &user, "hello")
            .await
            .unwrap();
        assert!(details.is_none());
    }
}
