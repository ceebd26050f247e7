pub mod models;
pub mod repository;

pub use models::UserRecord;
pub use repository::{InMemoryUserRepository, UserRepository};
