mod direct;
mod private;
mod public;

pub use direct::DirectMessageRoomType;
pub use private::PrivateRoomType;
pub use public::PublicRoomType;

use tracing::info;

use super::{constants::RoomSetting, RoomTypeDeps, RoomTypeRegistry};
use crate::{room::RoomRecord, shared::AppError};

/// Registry holding the channel, private group and direct message types
pub fn default_registry(deps: RoomTypeDeps) -> Result<RoomTypeRegistry, AppError> {
    let mut registry = RoomTypeRegistry::new();
    registry.register(PublicRoomType::new(deps.clone()))?;
    registry.register(PrivateRoomType::new(deps.clone()))?;
    registry.register(DirectMessageRoomType::new(deps))?;

    info!(room_types = registry.len(), "Registered built-in room types");
    Ok(registry)
}

/// Setting rules shared by channels and private groups: broadcast rooms are
/// read-only by construction, so the read-only toggles follow the broadcast flag.
fn group_setting_change(room: &RoomRecord, setting: RoomSetting, allow_encryption: bool) -> bool {
    match setting {
        RoomSetting::Broadcast => room.broadcast,
        RoomSetting::ReadOnly => !room.broadcast,
        RoomSetting::ReactWhenReadOnly => !room.broadcast && room.read_only,
        RoomSetting::Encrypted => allow_encryption,
        _ => true,
    }
}
