pub mod models;
pub mod repository;

pub use models::{MessageRecord, RoomRecord, UploadAccess};
pub use repository::{InMemoryRoomRepository, RoomRepository};
