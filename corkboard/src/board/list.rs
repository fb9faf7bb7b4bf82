//! ListBoards command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{Board, UserId};
use async_trait::async_trait;
use serde::Deserialize;

/// List the boards owned by a user, ordered by `position` descending.
///
/// Highest position sorts first, so the most recently appended board
/// leads the list; `ReorderBoards` writes positions to keep whatever
/// order the client last asked for under this read.
#[derive(Debug, Deserialize)]
pub struct ListBoards {
    /// The owning user
    pub owner: UserId,
}

impl ListBoards {
    pub fn new(owner: impl Into<UserId>) -> Self {
        Self {
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListBoards {
    type Output = Vec<Board>;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<Vec<Board>> {
        let mut boards = ctx.boards_for_user(&self.owner).await?;
        boards.sort_by(|a, b| b.position.cmp(&a.position).then(a.id.cmp(&b.id)));
        Ok(boards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::types::User;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_newest_board_first() {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let user = User::new("alice", "pw");
        ctx.write_user(&user).await.unwrap();

        let first = CreateBoard::new(user.id.clone()).execute(&ctx).await.unwrap();
        let second = CreateBoard::new(user.id.clone()).execute(&ctx).await.unwrap();

        let boards = ListBoards::new(user.id).execute(&ctx).await.unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].id, second.id);
        assert_eq!(boards[1].id, first.id);
    }

    #[tokio::test]
    async fn test_scoped_to_owner() {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let alice = User::new("alice", "pw");
        let bob = User::new("bob", "pw");
        ctx.write_user(&alice).await.unwrap();
        ctx.write_user(&bob).await.unwrap();

        CreateBoard::new(alice.id.clone()).execute(&ctx).await.unwrap();
        CreateBoard::new(bob.id).execute(&ctx).await.unwrap();

        let boards = ListBoards::new(alice.id).execute(&ctx).await.unwrap();
        assert_eq!(boards.len(), 1);
    }
}
