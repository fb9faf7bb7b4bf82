//! Board record and its read-time aggregate

use super::ids::{BoardId, UserId};
use super::section::SectionWithTasks;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Icon a new board starts with
pub const DEFAULT_ICON: &str = "📃";

/// Title applied when a board's title is created or updated empty
pub const DEFAULT_TITLE: &str = "Untitled";

/// Placeholder description applied when a board's description is empty
pub const DEFAULT_DESCRIPTION: &str = "Add description here
    🟢 You can add multiline description
    🟢 Let's start...";

/// A top-level, user-owned container of sections.
///
/// Carries two independent ordering axes: `position` is dense over the set
/// of ALL boards in the store, `favourite_position` is dense over the
/// subset where `favourite` is true. Toggling `favourite` never touches
/// `position`, and vice versa. While `favourite` is false the stored
/// `favourite_position` is stale and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    /// Owning user
    pub user: UserId,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub position: i64,
    pub favourite: bool,
    pub favourite_position: i64,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Create a new board owned by `user` at the given global position
    pub fn new(user: UserId, position: i64) -> Self {
        Self {
            id: BoardId::new(),
            user,
            icon: DEFAULT_ICON.to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            position,
            favourite: false,
            favourite_position: 0,
            created_at: Utc::now(),
        }
    }
}

/// A board plus all its sections, each carrying its tasks - the
/// aggregate a board view renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    pub sections: Vec<SectionWithTasks>,
}
