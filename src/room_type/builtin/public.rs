use std::sync::Arc;

use super::group_setting_change;
use crate::room::RoomRecord;
use crate::room_type::{
    NavigationRoute, RoomMemberAction, RoomSetting, RoomTypeBase, RoomTypeConfig,
    RoomTypeDeps, RoomTypeDescriptor, UiTextContext,
};
use crate::subscription::SubscriptionRecord;

/// Public channels, identifier `c`
pub struct PublicRoomType {
    base: RoomTypeBase,
}

impl PublicRoomType {
    pub const IDENTIFIER: &'static str = "c";

    pub fn new(deps: RoomTypeDeps) -> Self {
        let descriptor = RoomTypeDescriptor::new(Self::IDENTIFIER, 30)
            .with_icon("hashtag")
            .with_header("channels")
            .with_label("Channels")
            .with_route(Arc::new(NavigationRoute::new("channel", "/channel/:name")));

        Self {
            base: RoomTypeBase::new(descriptor, deps),
        }
    }
}

impl RoomTypeConfig for PublicRoomType {
    fn base(&self) -> &RoomTypeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RoomTypeBase {
        &mut self.base
    }

    fn allow_member_action(&self, _room: &RoomRecord, action: RoomMemberAction) -> bool {
        action != RoomMemberAction::Block
    }

    fn allow_room_setting_change(&self, room: &RoomRecord, setting: RoomSetting) -> bool {
        group_setting_change(room, setting, false)
    }

    fn can_add_user(&self, _room: &RoomRecord) -> bool {
        true
    }

    fn enable_members_list_profile(&self) -> bool {
        true
    }

    fn get_avatar_path(&self, room: &RoomRecord, _sub: Option<&SubscriptionRecord>) -> String {
        format!("/avatar/room/{}", room.id)
    }

    fn get_discussion_type(&self) -> &'static str {
        "c"
    }

    fn get_icon(&self, room: &RoomRecord) -> Option<String> {
        if room.is_discussion() {
            return Some("discussion".to_string());
        }
        self.icon().map(str::to_string)
    }

    fn get_ui_text(&self, context: UiTextContext) -> &'static str {
        match context {
            UiTextContext::HideWarning => "Hide_Room_Warning",
            UiTextContext::LeaveWarning => "Leave_Room_Warning",
            _ => "",
        }
    }

    fn include_in_dashboard(&self) -> bool {
        true
    }

    fn include_in_room_search(&self) -> bool {
        true
    }

    fn is_group_chat(&self, _room: Option<&RoomRecord>) -> bool {
        true
    }
}
