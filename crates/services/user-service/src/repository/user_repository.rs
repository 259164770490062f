//! User repository with an in-memory implementation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every operation is total: a missing id is a normal `None`, never an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite the entry keyed by `user.id()` (last write wins)
    fn save(&self, user: User);

    /// Find user by ID
    fn load(&self, id: Uuid) -> Option<User>;

    /// Remove user by ID; no-op when absent
    fn delete(&self, id: Uuid);
}

/// In-memory implementation of UserRepository.
///
/// A single lock guards the whole map, so each call is atomic on its own
/// but there is no transaction spanning several calls.
#[derive(Debug, Default)]
pub struct UserDbInMem {
    users: RwLock<HashMap<Uuid, User>>,
}

impl UserDbInMem {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` users
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Snapshot of the full mapping, for inspection in tests and tooling.
    pub fn users(&self) -> HashMap<Uuid, User> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every write is a single insert or remove, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for UserDbInMem {
    fn save(&self, user: User) {
        let id = user.id();
        let replaced = self.write().insert(id, user).is_some();
        debug!(user_id = %id, replaced, "Saved user");
    }

    fn load(&self, id: Uuid) -> Option<User> {
        let user = self.read().get(&id).cloned();
        debug!(user_id = %id, found = user.is_some(), "Loaded user");
        user
    }

    fn delete(&self, id: Uuid) {
        let removed = self.write().remove(&id).is_some();
        debug!(user_id = %id, removed, "Deleted user");
    }
}
