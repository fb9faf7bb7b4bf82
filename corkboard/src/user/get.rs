//! GetUser command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{User, UserId};
use async_trait::async_trait;
use serde::Deserialize;

/// Fetch a user by id, credential cleared
#[derive(Debug, Deserialize)]
pub struct GetUser {
    pub id: UserId,
}

impl GetUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for GetUser {
    type Output = User;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<User> {
        Ok(ctx.read_user(&self.id).await?.redacted())
    }
}
