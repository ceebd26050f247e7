pub mod store;

pub use store::{InMemorySettingsStore, SettingsStore};

/// Display users by their real name instead of their username
pub const UI_USE_REAL_NAME: &str = "UI_Use_Real_Name";
