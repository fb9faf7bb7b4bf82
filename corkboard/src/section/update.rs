//! UpdateSection command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{SectionId, SectionWithTasks};
use async_trait::async_trait;
use serde::Deserialize;

/// Rename a section. Returns the section with an empty task list
/// attached, mirroring `CreateSection`'s response shape - stored tasks
/// are never joined onto an update response.
#[derive(Debug, Deserialize)]
pub struct UpdateSection {
    /// The section to update
    pub id: SectionId,
    pub title: Option<String>,
}

impl UpdateSection {
    pub fn new(id: impl Into<SectionId>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for UpdateSection {
    type Output = SectionWithTasks;

    async fn execute(&self, ctx: &CorkboardContext) -> Result<SectionWithTasks> {
        let mut section = ctx.read_section(&self.id).await?;

        if let Some(title) = &self.title {
            section.title = title.clone();
        }

        ctx.write_section(&section).await?;
        Ok(SectionWithTasks::empty(section))
    }
}
