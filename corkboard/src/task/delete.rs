//! DeleteTask command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::TaskId;
use async_trait::async_trait;
use serde::Deserialize;

/// Delete a task.
///
/// Sibling positions are deliberately NOT renumbered here: the delete
/// path leaves a gap, and compaction happens on the section's next
/// explicit `MoveTasks` call (see DESIGN.md). Display order is unharmed
/// in the meantime - the surviving ranks still sort the same way.
#[derive(Debug, Deserialize)]
pub struct DeleteTask {
    /// The task to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteTask {
    type Output = ();

    async fn execute(&self, ctx: &CorkboardContext) -> Result<()> {
        // Read first so a missing id reports NotFound rather than
        // silently succeeding.
        let task = ctx.read_task(&self.id).await?;
        ctx.delete_task_file(&task.id).await
    }
}
