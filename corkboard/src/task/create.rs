//! CreateTask command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{SectionId, Task};
use async_trait::async_trait;
use serde::Deserialize;

/// Create a task under a section.
///
/// The create path does not compute an append position - the record is
/// stored at 0 and the next client-driven `MoveTasks` reconciles the
/// section's whole list. Position assignment is entirely the reorder
/// call's job.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    /// The owning section
    pub section: SectionId,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateTask {
    pub fn new(section: impl Into<SectionId>) -> Self {
        Self {
            section: section.into(),
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
impl Execute<CorkboardContext, CorkboardError> for CreateTask {
    type Output = Task;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<Task> {
        ctx.read_section(&self.section).await?;

        let mut task = Task::new(self.section.clone());
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
