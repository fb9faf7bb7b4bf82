//! CreateBoard command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{Board, UserId};
use async_trait::async_trait;
use serde::Deserialize;

/// Create a new board for `owner` with default display fields.
///
/// The new board's `position` is seeded with the count of ALL boards in
/// the store - not just the owner's. That cross-owner coupling is
/// deliberate (see DESIGN.md); under the descending list order it
/// appends the new board at the front.
#[derive(Debug, Deserialize)]
pub struct CreateBoard {
    /// The owning user
    pub owner: UserId,
}

impl CreateBoard {
    pub fn new(owner: impl Into<UserId>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateBoard {
    type Output = Board;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<Board> {
        ctx.read_user(&self.owner).await?;

        let count = ctx.count_boards().await?;
        let board = Board::new(self.owner.clone(), count as i64);
        ctx.write_board(&board).await?;
        Ok(board)
    }
}
