//! User record

use super::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user. Owns boards; immutable after signup except for
/// credential rotation (out of scope).
///
/// `secret` is the opaque credential the excluded auth collaborator
/// verifies against. It is persisted on the record but cleared from every
/// value a command returns - read paths never expose it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub secret: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            secret: secret.into(),
            created_at: Utc::now(),
        }
    }

    /// A copy safe to hand back to callers: credential blanked
    pub fn redacted(&self) -> Self {
        let mut user = self.clone();
        user.secret = String::new();
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_clears_secret() {
        let user = User::new("alice", "hunter2");
        let public = user.redacted();
        assert_eq!(public.username, "alice");
        assert!(public.secret.is_empty());
        assert_eq!(public.id, user.id);
    }
}
