// Library crate for room type configuration
// This file exposes the public API for integration tests

pub mod authorization;
pub mod config;
pub mod room;
pub mod room_type;
pub mod settings;
pub mod shared;
pub mod subscription;
pub mod user;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use room_type::{
    CallContext, RoomMemberAction, RoomSetting, RoomTypeBase, RoomTypeConfig, RoomTypeDeps,
    RoomTypeDescriptor, RoomTypeRegistry, UiTextContext,
};
pub use shared::{AppError, AppState};
