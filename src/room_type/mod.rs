pub mod builtin;
mod config;
mod constants;
mod context;
mod descriptor;
pub mod handlers;
mod registry;
mod route;
pub mod types;

pub use config::{NotificationDetails, RoomTypeBase, RoomTypeConfig, RoomTypeDeps};
pub use constants::{RoomMemberAction, RoomSetting, UiTextContext};
pub use context::CallContext;
pub use descriptor::RoomTypeDescriptor;
pub use handlers::router;
pub use registry::RoomTypeRegistry;
pub use route::{NavigationRoute, RoomTypeRoute, RoomTypeRouteConfig, RouteParams, RouteTarget};
