//! User service - Handles user-related use cases.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{UpdateUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
pub trait UserService: Send + Sync {
    /// Create and store a new user
    fn register(&self, name: String, age: i32) -> User;

    /// Look up a user; absence is `None`
    fn find_user(&self, id: Uuid) -> Option<User>;

    /// Look up a user that must exist
    fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Apply the given field changes and store the result
    fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User>;

    /// Remove a user if present
    fn remove_user(&self, id: Uuid);
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

impl UserService for UserManager {
    fn register(&self, name: String, age: i32) -> User {
        let user = User::new(name, age);
        self.repo.save(user.clone());
        info!(user_id = %user.id(), name = user.name(), "Registered user");
        user
    }

    fn find_user(&self, id: Uuid) -> Option<User> {
        self.repo.load(id)
    }

    fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.load(id).ok_or_not_found()
    }

    fn update_user(&self, id: Uuid, changes: UpdateUser) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        let mut user = self.repo.load(id).ok_or_not_found()?;

        if let Some(name) = changes.name {
            user.set_name(name);
        }
        if let Some(age) = changes.age {
            user.set_age(age);
        }
        if let Some(email) = changes.email {
            user.set_email(email);
        }

        self.repo.save(user.clone());
        Ok(user)
    }

    fn remove_user(&self, id: Uuid) {
        self.repo.delete(id);
    }
}
