//! CreateUser command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::User;
use async_trait::async_trait;
use serde::Deserialize;

/// Register a new user with a unique username.
///
/// The secret is stored opaquely; verification and token issuance belong
/// to the auth collaborator, not this engine. The returned record has the
/// secret cleared.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    /// Unique username (required, non-empty)
    pub username: String,
    /// Opaque credential
    pub secret: String,
}

impl CreateUser {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateUser {
    type Output = User;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<User> {
        if self.username.is_empty() {
            return Err(CorkboardError::missing_field("username"));
        }
        if self.secret.is_empty() {
            return Err(CorkboardError::missing_field("secret"));
        }

        if ctx.find_user_by_username(&self.username).await?.is_some() {
            return Err(CorkboardError::UsernameTaken {
                username: self.username.clone(),
            });
        }

        let user = User::new(&self.username, &self.secret);
        ctx.write_user(&user).await?;
        Ok(user.redacted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, CorkboardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_create_user() {
        let (_temp, ctx) = setup().await;

        let user = CreateUser::new("alice", "s3cret").execute(&ctx).await.unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.secret.is_empty());

        // The stored record keeps the credential.
        let stored = ctx.read_user(&user.id).await.unwrap();
        assert_eq!(stored.secret, "s3cret");
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let (_temp, ctx) = setup().await;

        CreateUser::new("alice", "a").execute(&ctx).await.unwrap();
        let err = CreateUser::new("alice", "b").execute(&ctx).await.unwrap_err();
        assert!(matches!(err, CorkboardError::UsernameTaken { .. }));
    }

    #[tokio::test]
    async fn test_empty_username_rejected() {
        let (_temp, ctx) = setup().await;

        let err = CreateUser::new("", "s").execute(&ctx).await.unwrap_err();
        assert!(err.is_validation());
    }
}
