//! MoveTasks command - the core intra/cross-section reorder

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{dense_ranks, RankDirection, SectionId, TaskId};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// Rewrite task positions after a drag, within one section or across two.
///
/// The caller has already computed the post-move membership and order of
/// both lists (the moved task spliced out of the source and into the
/// destination); this command's sole responsibility is writing consistent
/// positions, not computing the move. Task lists rank forward:
/// `position = index`, the list's first element at 0.
///
/// Same-section moves reconcile only the destination list. Cross-section
/// moves reconcile both lists independently, and every task written also
/// gets its `section` reference set to the list's owning section - that
/// is what actually re-homes the moved task.
///
/// Writes are sequential with no spanning transaction; the first failure
/// is surfaced with earlier writes already committed, and re-issuing the
/// same lists is the recovery.
#[derive(Debug, Deserialize)]
pub struct MoveTasks {
    pub source_section: SectionId,
    pub destination_section: SectionId,
    /// Source section's full task list after removal (ignored when the
    /// sections are the same)
    pub source_list: Vec<TaskId>,
    /// Destination section's full task list after insertion
    pub destination_list: Vec<TaskId>,
}

impl MoveTasks {
    pub fn new(
        source_section: impl Into<SectionId>,
        destination_section: impl Into<SectionId>,
        source_list: Vec<TaskId>,
        destination_list: Vec<TaskId>,
    ) -> Self {
        Self {
            source_section: source_section.into(),
            destination_section: destination_section.into(),
            source_list,
            destination_list,
        }
    }

    /// Reorder within a single section
    pub fn within(section: impl Into<SectionId>, list: Vec<TaskId>) -> Self {
        let section = section.into();
        Self {
            source_section: section.clone(),
            destination_section: section,
            source_list: list.clone(),
            destination_list: list,
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for MoveTasks {
    type Output = ();

    async fn execute(&self, ctx: &CorkboardContext) -> Result<()> {
        ctx.read_section(&self.destination_section).await?;

        if self.source_section == self.destination_section {
            reconcile_section(ctx, &self.destination_section, &self.destination_list).await
        } else {
            ctx.read_section(&self.source_section).await?;
            reconcile_section(ctx, &self.source_section, &self.source_list).await?;
            reconcile_section(ctx, &self.destination_section, &self.destination_list).await
        }
    }
}

/// Write `position = index` (and the owning section) for every task in
/// `list`, in list order. Empty lists reconcile to no writes.
async fn reconcile_section(
    ctx: &CorkboardContext,
    section: &SectionId,
    list: &[TaskId],
) -> Result<()> {
    for (id, rank) in dense_ranks(list, RankDirection::Forward) {
        if let Err(err) = write_task_rank(ctx, section, &id, rank).await {
            warn!(
                task = %id,
                section = %section,
                %err,
                "task reconciliation halted mid-list; earlier writes remain committed"
            );
            return Err(err);
        }
        debug!(task = %id, section = %section, rank, "wrote task rank");
    }
    Ok(())
}

/// Read one task, re-home it to `section`, and write its new rank.
/// Either failure belongs to the halting branch of the loop above.
async fn write_task_rank(
    ctx: &CorkboardContext,
    section: &SectionId,
    id: &TaskId,
    rank: i64,
) -> Result<()> {
    let mut task = ctx.read_task(id).await?;
    task.section = section.clone();
    task.position = rank;
    ctx.write_task(&task).await
}
