//! GetBoardDetail command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{BoardDetail, BoardId, SectionWithTasks, UserId};
use async_trait::async_trait;
use serde::Deserialize;

/// Fetch a board with its sections and their tasks - the aggregate a
/// board view renders from.
///
/// Owner-scoped: a board that exists but belongs to someone else reads
/// as `BoardNotFound`, indistinguishable from a truly absent one. Tasks
/// come back sorted by `position` descending, which is the ordering
/// contract clients must honor: visual index 0 is the HIGHEST position.
#[derive(Debug, Deserialize)]
pub struct GetBoardDetail {
    /// The board to fetch
    pub id: BoardId,
    /// The requesting owner
    pub owner: UserId,
}

impl GetBoardDetail {
    pub fn new(id: impl Into<BoardId>, owner: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for GetBoardDetail {
    type Output = BoardDetail;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<BoardDetail> {
        let board = ctx.read_board(&self.id).await?;
        if board.user != self.owner {
            return Err(CorkboardError::BoardNotFound {
                id: self.id.to_string(),
            });
        }

        let mut sections = Vec::new();
        for section in ctx.sections_for_board(&board.id).await? {
            let mut tasks = ctx.tasks_for_section(&section.id).await?;
            tasks.sort_by(|a, b| b.position.cmp(&a.position).then(a.id.cmp(&b.id)));
            sections.push(SectionWithTasks::new(section, tasks));
        }

        Ok(BoardDetail { board, sections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::types::{Section, Task, User};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, CorkboardContext, UserId) {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let user = User::new("alice", "pw");
        ctx.write_user(&user).await.unwrap();
        (temp, ctx, user.id)
    }

    #[tokio::test]
    async fn test_detail_joins_sections_and_tasks() {
        let (_temp, ctx, owner) = setup().await;

        let board = CreateBoard::new(owner.clone()).execute(&ctx).await.unwrap();
        let section = Section::new(board.id.clone());
        ctx.write_section(&section).await.unwrap();

        let mut low = Task::new(section.id.clone()).with_title("low");
        low.position = 0;
        let mut high = Task::new(section.id.clone()).with_title("high");
        high.position = 1;
        ctx.write_task(&low).await.unwrap();
        ctx.write_task(&high).await.unwrap();

        let detail = GetBoardDetail::new(board.id, owner).execute(&ctx).await.unwrap();
        assert_eq!(detail.sections.len(), 1);

        // Highest position first.
        let titles: Vec<_> = detail.sections[0]
            .tasks
            .iter()
            .map(|task| task.title.as_str())
            .collect();
        assert_eq!(titles, vec!["high", "low"]);
    }

    #[tokio::test]
    async fn test_foreign_board_reads_as_not_found() {
        let (_temp, ctx, alice) = setup().await;

        let bob = User::new("bob", "pw");
        ctx.write_user(&bob).await.unwrap();
        let board = CreateBoard::new(bob.id).execute(&ctx).await.unwrap();

        let err = GetBoardDetail::new(board.id, alice).execute(&ctx).await.unwrap_err();
        assert!(matches!(err, CorkboardError::BoardNotFound { .. }));
    }
}
