//! User domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::default_email;
use crate::error::DomainError;

/// User domain entity.
///
/// The `id` is generated on construction and has no setter. Equality and
/// hashing cover every field, so two users sharing an id but differing in
/// name are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    id: Uuid,
    name: String,
    age: i32,
    email: String,
}

impl User {
    /// Create a new user with a fresh random id and `<name>@email.com` as email.
    ///
    /// No validation is applied: empty names and negative ages are kept as given.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            email: default_email(&name),
            name,
            age,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name. The email is left untouched.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) -> &mut Self {
        self.age = age;
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = email.into();
        self
    }
}

/// Wire shape of a user, checked before it becomes a `User`
#[derive(Deserialize)]
struct UserRecord {
    id: Uuid,
    name: String,
    age: i32,
    email: String,
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        if record.id.is_nil() {
            return Err(DomainError::validation("user id must not be nil"));
        }

        Ok(Self {
            id: record.id,
            name: record.name,
            age: record.age,
            email: record.email,
        })
    }
}

/// User update data transfer object
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    /// New display name (email is not re-derived)
    pub name: Option<String>,
    /// New age
    pub age: Option<i32>,
    /// New email address
    pub email: Option<String>,
}

impl UpdateUser {
    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}, age {}", self.id, self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_user_fields() {
        let user = User::new("Cora", 8);

        assert_eq!(user.name(), "Cora");
        assert_eq!(user.age(), 8);
        assert_eq!(user.email(), "Cora@email.com");
        assert!(!user.id().is_nil());
    }

    #[test]
    fn test_new_user_accepts_anything() {
        let user = User::new("", -5);

        assert_eq!(user.name(), "");
        assert_eq!(user.age(), -5);
        assert_eq!(user.email(), "@email.com");
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<Uuid> = (0..10_000).map(|_| User::new("Same", 1).id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_id_is_stable() {
        let mut user = User::new("Mika", 12);
        let id = user.id();

        user.set_name("Mikaela").set_age(13).set_email("mika@example.org");

        assert_eq!(user.id(), id);
    }

    #[test]
    fn test_setters_chain() {
        let mut user = User::new("Tashi", 11);
        user.set_name("Tash").set_age(12).set_email("tash@example.org");

        assert_eq!(user.name(), "Tash");
        assert_eq!(user.age(), 12);
        assert_eq!(user.email(), "tash@example.org");
    }

    #[test]
    fn test_rename_keeps_email() {
        let mut user = User::new("Cora", 8);
        user.set_name("Nora");

        assert_eq!(user.email(), "Cora@email.com");
    }

    #[test]
    fn test_display_format() {
        let user = User::new("Cora", 8);
        assert_eq!(user.to_string(), format!("{} = Cora, age 8", user.id()));
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = User::new("Cora", 8);
        let b = User::new("Cora", 8);

        // Different generated ids
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_mutation_breaks_equality() {
        let original = User::new("Cora", 8);

        let mut renamed = original.clone();
        renamed.set_name("Nora");
        assert_ne!(original, renamed);

        let mut older = original.clone();
        older.set_age(9);
        assert_ne!(original, older);

        let mut moved = original.clone();
        moved.set_email("cora@example.org");
        assert_ne!(original, moved);
    }

    #[test]
    fn test_hash_follows_equality() {
        let user = User::new("Cora", 8);
        let mut renamed = user.clone();
        renamed.set_name("Nora");

        let mut set = HashSet::new();
        set.insert(user.clone());
        set.insert(user.clone());
        set.insert(renamed);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&user));
    }

    #[test]
    fn test_json_shape() {
        let user = User::new("Mika", 12);
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], user.id().to_string());
        assert_eq!(value["name"], "Mika");
        assert_eq!(value["age"], 12);
        assert_eq!(value["email"], "Mika@email.com");

        let restored: User = serde_json::from_value(value).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_json_rejects_nil_id() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000000","name":"x","age":1,"email":"e"}"#;
        let result = serde_json::from_str::<User>(json);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("user id must not be nil"));
    }

    #[test]
    fn test_update_user_is_empty() {
        assert!(UpdateUser::default().is_empty());

        let changes = UpdateUser {
            age: Some(3),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
