//! Service layer - use cases on top of the repository.

mod user_service;

pub use user_service::{UserManager, UserService};
