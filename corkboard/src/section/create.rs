//! CreateSection command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{BoardId, Section, SectionWithTasks};
use async_trait::async_trait;
use serde::Deserialize;

/// Create a new section under a board.
///
/// Returns the section with an empty task list attached for the caller's
/// convenience - the task list is a read-time join, never a stored field.
/// Sections carry no position of their own; boards display them in
/// creation order.
#[derive(Debug, Deserialize)]
pub struct CreateSection {
    /// The owning board
    pub board: BoardId,
}

impl CreateSection {
    pub fn new(board: impl Into<BoardId>) -> Self {
        Self {
            board: board.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateSection {
    type Output = SectionWithTasks;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<SectionWithTasks> {
        ctx.read_board(&self.board).await?;

        let section = Section::new(self.board.clone());
        ctx.write_section(&section).await?;
        Ok(SectionWithTasks::empty(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::types::User;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_section() {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let user = User::new("alice", "pw");
        ctx.write_user(&user).await.unwrap();
        let board = CreateBoard::new(user.id).execute(&ctx).await.unwrap();

        let created = CreateSection::new(board.id.clone()).execute(&ctx).await.unwrap();
        assert!(created.tasks.is_empty());
        assert_eq!(created.section.board, board.id);
        assert!(created.section.title.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_board_rejected() {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let err = CreateSection::new(BoardId::new()).execute(&ctx).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
