//! Client reordering controllers.
//!
//! Each view holds the working in-memory ordering the UI renders from.
//! A drag-end event splices the local state optimistically, then issues
//! the matching reorder command with the full post-move list(s). When
//! the command fails, the controller restores the order it held before
//! the drag, so the view never keeps an ordering the store rejected
//! (see DESIGN.md on this choice).

use crate::board::{ReorderBoards, ReorderFavourites};
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::task::MoveTasks;
use crate::types::{Board, BoardDetail, SectionId, SectionWithTasks, TaskId};

/// A drag-end event over the task lists of a board view
#[derive(Debug, Clone)]
pub struct TaskDragEnd {
    pub source_section: SectionId,
    pub source_index: usize,
    pub destination_section: SectionId,
    pub destination_index: usize,
}

/// The sidebar's all-boards list, display order (position descending)
#[derive(Debug)]
pub struct BoardListView {
    boards: Vec<Board>,
}

impl BoardListView {
    /// Wrap a `ListBoards` result
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// The current working order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Apply a drag within the list and persist the new order.
    ///
    /// On failure the prior order is restored and the error returned.
    pub async fn drag_end(
        &mut self,
        ctx: &CorkboardContext,
        source_index: usize,
        destination_index: usize,
    ) -> Result<()> {
        splice_guard(self.boards.len(), source_index, destination_index)?;

        let previous = self.boards.clone();
        let moved = self.boards.remove(source_index);
        self.boards.insert(destination_index, moved);

        let order: Vec<_> = self.boards.iter().map(|board| board.id.clone()).collect();
        match ReorderBoards::new(order).execute(ctx).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.boards = previous;
                Err(err)
            }
        }
    }
}

/// The sidebar's favourites list, display order (favourite_position
/// descending)
#[derive(Debug)]
pub struct FavouritesView {
    boards: Vec<Board>,
}

impl FavouritesView {
    /// Wrap a `ListFavourites` result
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// The current working order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Apply a drag within the favourites list and persist the new order.
    ///
    /// On failure the prior order is restored and the error returned.
    pub async fn drag_end(
        &mut self,
        ctx: &CorkboardContext,
        source_index: usize,
        destination_index: usize,
    ) -> Result<()> {
        splice_guard(self.boards.len(), source_index, destination_index)?;

        let previous = self.boards.clone();
        let moved = self.boards.remove(source_index);
        self.boards.insert(destination_index, moved);

        let order: Vec<_> = self.boards.iter().map(|board| board.id.clone()).collect();
        match ReorderFavourites::new(order).execute(ctx).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.boards = previous;
                Err(err)
            }
        }
    }
}

/// A board view: the sections (with tasks) a `GetBoardDetail` returned
#[derive(Debug)]
pub struct BoardDetailView {
    sections: Vec<SectionWithTasks>,
}

impl BoardDetailView {
    /// Wrap a `GetBoardDetail` result
    pub fn new(detail: BoardDetail) -> Self {
        Self {
            sections: detail.sections,
        }
    }

    /// The current working state
    pub fn sections(&self) -> &[SectionWithTasks] {
        &self.sections
    }

    /// Apply a task drag, within one section or across two, and persist
    /// the resulting positions via `MoveTasks`.
    ///
    /// The controller computes the post-move membership and order of
    /// both lists - the engine only writes what it is handed. On failure
    /// the prior state is restored and the error returned.
    pub async fn drag_end(&mut self, ctx: &CorkboardContext, drag: TaskDragEnd) -> Result<()> {
        let source_col = self.section_index(&drag.source_section)?;
        let destination_col = self.section_index(&drag.destination_section)?;

        if drag.source_index >= self.sections[source_col].tasks.len() {
            return Err(CorkboardError::invalid_value(
                "source_index",
                "out of range",
            ));
        }

        let previous = self.sections.clone();

        let (source_list, destination_list) = if source_col == destination_col {
            let tasks = &mut self.sections[destination_col].tasks;
            if drag.destination_index >= tasks.len() {
                return Err(CorkboardError::invalid_value(
                    "destination_index",
                    "out of range",
                ));
            }
            let moved = tasks.remove(drag.source_index);
            tasks.insert(drag.destination_index, moved);

            let list = task_ids(tasks);
            (list.clone(), list)
        } else {
            if drag.destination_index > self.sections[destination_col].tasks.len() {
                return Err(CorkboardError::invalid_value(
                    "destination_index",
                    "out of range",
                ));
            }
            let mut moved = self.sections[source_col].tasks.remove(drag.source_index);
            moved.section = drag.destination_section.clone();
            self.sections[destination_col]
                .tasks
                .insert(drag.destination_index, moved);

            (
                task_ids(&self.sections[source_col].tasks),
                task_ids(&self.sections[destination_col].tasks),
            )
        };

        let command = MoveTasks::new(
            drag.source_section,
            drag.destination_section,
            source_list,
            destination_list,
        );
        match command.execute(ctx).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.sections = previous;
                Err(err)
            }
        }
    }

    fn section_index(&self, id: &SectionId) -> Result<usize> {
        self.sections
            .iter()
            .position(|s| &s.section.id == id)
            .ok_or_else(|| CorkboardError::SectionNotFound { id: id.to_string() })
    }
}

fn task_ids(tasks: &[crate::types::Task]) -> Vec<TaskId> {
    tasks.iter().map(|task| task.id.clone()).collect()
}

fn splice_guard(len: usize, source: usize, destination: usize) -> Result<()> {
    if source >= len {
        return Err(CorkboardError::invalid_value("source_index", "out of range"));
    }
    if destination >= len {
        return Err(CorkboardError::invalid_value(
            "destination_index",
            "out of range",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CreateBoard, GetBoardDetail, ListBoards};
    use crate::section::CreateSection;
    use crate::task::CreateTask;
    use crate::types::{BoardId, User, UserId};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, CorkboardContext, UserId) {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let user = User::new("alice", "pw");
        ctx.write_user(&user).await.unwrap();
        (temp, ctx, user.id)
    }

    fn board_ids(view: &BoardListView) -> Vec<BoardId> {
        view.boards().iter().map(|board| board.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_board_drag_persists() {
        let (_temp, ctx, owner) = setup().await;

        for _ in 0..3 {
            CreateBoard::new(owner.clone()).execute(&ctx).await.unwrap();
        }
        let listed = ListBoards::new(owner.clone()).execute(&ctx).await.unwrap();
        let mut view = BoardListView::new(listed);

        // Drag the top board to the bottom.
        view.drag_end(&ctx, 0, 2).await.unwrap();
        let local = board_ids(&view);

        // The store agrees with the optimistic state.
        let refetched = ListBoards::new(owner).execute(&ctx).await.unwrap();
        let stored: Vec<_> = refetched.into_iter().map(|board| board.id).collect();
        assert_eq!(local, stored);
    }

    #[tokio::test]
    async fn test_board_drag_reverts_on_failure() {
        let (_temp, ctx, owner) = setup().await;

        for _ in 0..2 {
            CreateBoard::new(owner.clone()).execute(&ctx).await.unwrap();
        }
        let listed = ListBoards::new(owner).execute(&ctx).await.unwrap();
        let mut view = BoardListView::new(listed);
        let before = board_ids(&view);

        // Sabotage: the top board vanishes behind the view's back, so the
        // reorder command fails partway.
        ctx.delete_board_file(&view.boards()[0].id).await.unwrap();

        let err = view.drag_end(&ctx, 0, 1).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(board_ids(&view), before);
    }

    #[tokio::test]
    async fn test_out_of_range_drag_rejected_before_any_write() {
        let (_temp, ctx, owner) = setup().await;

        CreateBoard::new(owner.clone()).execute(&ctx).await.unwrap();
        let listed = ListBoards::new(owner).execute(&ctx).await.unwrap();
        let mut view = BoardListView::new(listed);

        let err = view.drag_end(&ctx, 0, 5).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_task_drag_across_sections() {
        let (_temp, ctx, owner) = setup().await;

        let board = CreateBoard::new(owner.clone()).execute(&ctx).await.unwrap();
        let s1 = CreateSection::new(board.id.clone()).execute(&ctx).await.unwrap();
        let s2 = CreateSection::new(board.id.clone()).execute(&ctx).await.unwrap();

        let mut s1_ids = Vec::new();
        for i in 0..3 {
            let task = CreateTask::new(s1.section.id.clone())
                .with_title(format!("t{}", i + 1))
                .execute(&ctx)
                .await
                .unwrap();
            s1_ids.push(task.id);
        }
        let t4 = CreateTask::new(s2.section.id.clone()).execute(&ctx).await.unwrap();

        // Seed stored positions so the fetched view order is defined, then
        // build the view.
        MoveTasks::within(s1.section.id.clone(), s1_ids.clone())
            .execute(&ctx)
            .await
            .unwrap();
        MoveTasks::within(s2.section.id.clone(), vec![t4.id.clone()])
            .execute(&ctx)
            .await
            .unwrap();

        let detail = GetBoardDetail::new(board.id, owner).execute(&ctx).await.unwrap();
        let mut view = BoardDetailView::new(detail);

        // The view renders descending by position: s1 shows [t3, t2, t1].
        // Drag its middle card (t2) onto the top of s2.
        view.drag_end(
            &ctx,
            TaskDragEnd {
                source_section: s1.section.id.clone(),
                source_index: 1,
                destination_section: s2.section.id.clone(),
                destination_index: 0,
            },
        )
        .await
        .unwrap();

        let moved = ctx.read_task(&s1_ids[1]).await.unwrap();
        assert_eq!(moved.section, s2.section.id);
        assert_eq!(moved.position, 0);
        assert_eq!(ctx.read_task(&t4.id).await.unwrap().position, 1);
        assert_eq!(ctx.tasks_for_section(&s1.section.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_task_drag_reverts_on_failure() {
        let (_temp, ctx, owner) = setup().await;

        let board = CreateBoard::new(owner.clone()).execute(&ctx).await.unwrap();
        let section = CreateSection::new(board.id.clone()).execute(&ctx).await.unwrap();
        let first = CreateTask::new(section.section.id.clone()).execute(&ctx).await.unwrap();
        let second = CreateTask::new(section.section.id.clone()).execute(&ctx).await.unwrap();
        MoveTasks::within(
            section.section.id.clone(),
            vec![first.id.clone(), second.id.clone()],
        )
        .execute(&ctx)
        .await
        .unwrap();

        let detail = GetBoardDetail::new(board.id, owner).execute(&ctx).await.unwrap();
        let mut view = BoardDetailView::new(detail);
        let before: Vec<_> = task_ids(&view.sections()[0].tasks);

        // One of the rendered tasks vanishes behind the view's back.
        ctx.delete_task_file(&first.id).await.unwrap();

        let err = view
            .drag_end(
                &ctx,
                TaskDragEnd {
                    source_section: section.section.id.clone(),
                    source_index: 0,
                    destination_section: section.section.id.clone(),
                    destination_index: 1,
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(task_ids(&view.sections()[0].tasks), before);
    }
}
