use async_trait::async_trait;
use std::sync::Arc;

use crate::room::RoomRecord;
use crate::room_type::{
    CallContext, NavigationRoute, NotificationDetails, RoomMemberAction, RoomSetting,
    RoomTypeBase, RoomTypeConfig, RoomTypeDeps, RoomTypeDescriptor, UiTextContext,
};
use crate::settings::UI_USE_REAL_NAME;
use crate::shared::AppError;
use crate::subscription::SubscriptionRecord;
use crate::user::UserRecord;

/// Direct conversations between two or more users, identifier `d`
pub struct DirectMessageRoomType {
    base: RoomTypeBase,
}

impl DirectMessageRoomType {
    pub const IDENTIFIER: &'static str = "d";

    pub fn new(deps: RoomTypeDeps) -> Self {
        let descriptor = RoomTypeDescriptor::new(Self::IDENTIFIER, 50)
            .with_icon("at")
            .with_header("directMessages")
            .with_label("Direct_Messages")
            .with_route(Arc::new(NavigationRoute::new("direct", "/direct/:rid")));

        Self {
            base: RoomTypeBase::new(descriptor, deps),
        }
    }
}

#[async_trait]
impl RoomTypeConfig for DirectMessageRoomType {
    fn base(&self) -> &RoomTypeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RoomTypeBase {
        &mut self.base
    }

    fn allow_member_action(&self, room: &RoomRecord, action: RoomMemberAction) -> bool {
        match action {
            RoomMemberAction::Block => !self.is_group_chat(Some(room)),
            _ => false,
        }
    }

    fn allow_room_setting_change(&self, _room: &RoomRecord, setting: RoomSetting) -> bool {
        !matches!(
            setting,
            RoomSetting::Type
                | RoomSetting::RoomName
                | RoomSetting::SystemMessages
                | RoomSetting::RoomDescription
                | RoomSetting::ReadOnly
                | RoomSetting::ReactWhenReadOnly
                | RoomSetting::ArchiveOrUnarchive
                | RoomSetting::JoinCode
        )
    }

    fn enable_members_list_profile(&self) -> bool {
        true
    }

    fn get_avatar_path(&self, room: &RoomRecord, sub: Option<&SubscriptionRecord>) -> String {
        if self.is_group_chat(Some(room)) {
            return format!("/avatar/{}{}", room.member_count(), room.usernames.join(","));
        }

        sub.and_then(|s| s.name.as_deref())
            .or(room.name.as_deref())
            .map(|name| format!("/avatar/{}", name))
            .unwrap_or_default()
    }

    /// Notifications in a conversation are titled by the sender rather than the room
    async fn get_notification_details(
        &self,
        ctx: &CallContext,
        _room: &RoomRecord,
        user: &UserRecord,
        message: &str,
    ) -> Result<Option<NotificationDetails>, AppError> {
        if !ctx.is_server {
            return Ok(None);
        }

        let use_real_name = self.base().settings().get_bool(UI_USE_REAL_NAME).await?;
        let title = match (&user.name, use_real_name) {
            (Some(name), true) => name.clone(),
            _ => format!("@{}", user.username),
        };

        Ok(Some(NotificationDetails {
            title,
            text: message.to_string(),
        }))
    }

    fn get_ui_text(&self, context: UiTextContext) -> &'static str {
        match context {
            UiTextContext::HideWarning => "Hide_Private_Warning",
            UiTextContext::LeaveWarning => "Leave_Private_Warning",
            _ => "",
        }
    }

    fn is_emit_allowed(&self) -> bool {
        true
    }

    /// Conversations with more than two members behave like small groups
    fn is_group_chat(&self, room: Option<&RoomRecord>) -> bool {
        room.is_some_and(|r| r.member_count() > 2)
    }

    fn prevent_renaming(&self) -> bool {
        true
    }

    fn support_members_list(&self) -> bool {
        false
    }

    fn user_detail_show_admin(&self) -> bool {
        false
    }
}
