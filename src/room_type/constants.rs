use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Room settings that a room type may lock against editing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
    AsRefStr, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RoomSetting {
    Type,
    RoomName,
    RoomTopic,
    RoomAnnouncement,
    RoomDescription,
    ReadOnly,
    ReactWhenReadOnly,
    ArchiveOrUnarchive,
    JoinCode,
    Broadcast,
    SystemMessages,
    Encrypted,
}

/// Member-management actions a room type may allow
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
    AsRefStr, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RoomMemberAction {
    Archive,
    Ignore,
    Block,
    Mute,
    SetAsOwner,
    SetAsLeader,
    SetAsModerator,
    Leave,
    RemoveUser,
    Join,
    Invite,
}

/// UI elements that ask a room type for a translation key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
    AsRefStr, Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum UiTextContext {
    CloseWarning,
    HideWarning,
    LeaveWarning,
    NoRoomsSubscribed,
}
