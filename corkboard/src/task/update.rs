//! UpdateTask command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{Task, TaskId};
use async_trait::async_trait;
use serde::Deserialize;

/// Update a task's title and/or content. Position and section are the
/// exclusive business of `MoveTasks`.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    /// The task to update
    pub id: TaskId,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for UpdateTask {
    type Output = Task;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<Task> {
        let mut task = ctx.read_task(&self.id).await?;

        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(content) = &self.content {
            task.content = content.clone();
        }

        ctx.write_task(&task).await?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::section::CreateSection;
    use crate::task::CreateTask;
    use crate::types::User;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_update_task_fields() {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let user = User::new("alice", "pw");
        ctx.write_user(&user).await.unwrap();
        let board = CreateBoard::new(user.id).execute(&ctx).await.unwrap();
        let section = CreateSection::new(board.id).execute(&ctx).await.unwrap();
        let task = CreateTask::new(section.section.id).execute(&ctx).await.unwrap();

        let updated = UpdateTask::new(task.id)
            .with_title("Review PR")
            .with_content("Look at the move path closely")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(updated.title, "Review PR");
        assert_eq!(updated.content, "Look at the move path closely");
        // Ordering axis untouched.
        assert_eq!(updated.position, task.position);
        assert_eq!(updated.section, task.section);
    }

    #[tokio::test]
    async fn test_update_missing_task() {
        let temp = TempDir::new().unwrap();
        let ctx = CorkboardContext::new(temp.path().join(".corkboard"));
        ctx.create_directories().await.unwrap();

        let err = UpdateTask::new(TaskId::new())
            .with_title("x")
            .execute(&ctx)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
