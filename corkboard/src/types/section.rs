//! Section record

use super::ids::{BoardId, SectionId};
use super::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A column of tasks within a board.
///
/// Sections have no position field of their own - boards display them in
/// creation (id) order. Deleting a section cascades to its tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Owning board
    pub board: BoardId,
    #[serde(default)]
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Section {
    /// Create a new section under `board`, title empty
    pub fn new(board: BoardId) -> Self {
        Self {
            id: SectionId::new(),
            board,
            title: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// A section with its task list attached - a read-time join, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionWithTasks {
    #[serde(flatten)]
    pub section: Section,
    pub tasks: Vec<Task>,
}

impl SectionWithTasks {
    /// Attach a task list to a section
    pub fn new(section: Section, tasks: Vec<Task>) -> Self {
        Self { section, tasks }
    }

    /// A freshly created section: no tasks yet
    pub fn empty(section: Section) -> Self {
        Self {
            section,
            tasks: Vec::new(),
        }
    }
}
