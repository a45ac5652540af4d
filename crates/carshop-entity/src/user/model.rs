//! User entity model.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// An account able to operate the dealership system.
///
/// `username` is unique across all users.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Sequence-generated identifier.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Login secret.
    pub password: String,
    /// Access role.
    pub role: UserRole,
}

impl User {
    /// Build a user that has not been persisted yet (id `0`).
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Return a copy carrying the given id.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

// Audit rows and logs stringify users through `Debug`; keep the password out.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let user = User::new("alice", "hunter2", UserRole::Client).with_id(3);
        let rendered = format!("{user:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
