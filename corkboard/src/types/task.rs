//! Task record

use super::ids::{SectionId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An atomic work item within a section.
///
/// `position` is dense within the owning section's task set. Creation does
/// not compute an append position - a new task is stored at 0 and the next
/// client-driven reorder reconciles the whole list (see `task::MoveTasks`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Owning section; rewritten when a move crosses sections
    pub section: SectionId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task under `section`
    pub fn new(section: SectionId) -> Self {
        Self {
            id: TaskId::new(),
            section,
            title: String::new(),
            content: String::new(),
            position: 0,
            created_at: Utc::now(),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
