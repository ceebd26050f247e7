pub mod service;

pub use service::{AuthorizationService, InMemoryAuthorizationService};
