pub mod models;
pub mod repository;

pub use models::SubscriptionRecord;
pub use repository::{InMemorySubscriptionRepository, SubscriptionRepository};
