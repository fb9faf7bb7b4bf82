//! Cascade deletion: parents take their children with them.
//!
//! Deletion order is always children before parent, so no read path can
//! see a parent whose children are gone while the parent lingers the
//! other way around. The walks are sequential per-record deletes with no
//! spanning transaction; a crash mid-cascade can leave orphans, and no
//! compensating sweep runs (see DESIGN.md). Callers renumber surviving
//! siblings afterwards.

use crate::context::CorkboardContext;
use crate::error::Result;
use crate::types::{Board, Section};
use tracing::info;

/// Delete every task of every section of `board`, then the sections,
/// then the board record itself.
pub async fn delete_board_tree(ctx: &CorkboardContext, board: &Board) -> Result<()> {
    let sections = ctx.sections_for_board(&board.id).await?;

    for section in &sections {
        delete_section_tree(ctx, section).await?;
    }

    ctx.delete_board_file(&board.id).await?;
    info!(board = %board.id, sections = sections.len(), "deleted board tree");
    Ok(())
}

/// Delete every task of `section`, then the section record itself.
pub async fn delete_section_tree(ctx: &CorkboardContext, section: &Section) -> Result<()> {
    let tasks = ctx.delete_tasks_for_section(&section.id).await?;
    ctx.delete_section_file(&section.id).await?;
    info!(section = %section.id, tasks, "deleted section tree");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Task, UserId};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, CorkboardContext) {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();
        (temp, ctx)
    }

    #[tokio::test]
    async fn test_section_tree_removes_tasks_first() {
        let (_temp, ctx) = setup().await;

        let board = Board::new(UserId::new(), 0);
        ctx.write_board(&board).await.unwrap();
        let section = Section::new(board.id.clone());
        ctx.write_section(&section).await.unwrap();
        ctx.write_task(&Task::new(section.id.clone())).await.unwrap();

        delete_section_tree(&ctx, &section).await.unwrap();

        assert!(ctx.tasks_for_section(&section.id).await.unwrap().is_empty());
        assert!(ctx.read_section(&section.id).await.is_err());
    }

    #[tokio::test]
    async fn test_board_tree_is_complete() {
        let (_temp, ctx) = setup().await;

        let board = Board::new(UserId::new(), 0);
        ctx.write_board(&board).await.unwrap();
        for _ in 0..2 {
            let section = Section::new(board.id.clone());
            ctx.write_section(&section).await.unwrap();
            ctx.write_task(&Task::new(section.id.clone())).await.unwrap();
            ctx.write_task(&Task::new(section.id.clone())).await.unwrap();
        }

        delete_board_tree(&ctx, &board).await.unwrap();

        assert!(ctx.read_board(&board.id).await.is_err());
        assert!(ctx.sections_for_board(&board.id).await.unwrap().is_empty());
        assert!(ctx.list_task_ids().await.unwrap().is_empty());
    }
}
