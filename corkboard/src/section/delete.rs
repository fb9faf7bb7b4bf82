//! DeleteSection command

use crate::cascade;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::SectionId;
use async_trait::async_trait;
use serde::Deserialize;

/// Delete a section and every task in it, tasks first.
///
/// Sections have no position field, so no sibling renumbering follows.
#[derive(Debug, Deserialize)]
pub struct DeleteSection {
    /// The section to delete
    pub id: SectionId,
}

impl DeleteSection {
    pub fn new(id: impl Into<SectionId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteSection {
    type Output = ();

    async fn execute(&self, ctx: &CorkboardContext) -> Result<()> {
        let section = ctx.read_section(&self.id).await?;
        cascade::delete_section_tree(ctx, &section).await
    }
}
