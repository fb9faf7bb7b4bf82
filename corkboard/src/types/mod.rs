//! Core types for the corkboard engine

mod board;
mod ids;
mod position;
mod section;
mod task;
mod user;

// Re-export all types
pub use board::{Board, BoardDetail, DEFAULT_DESCRIPTION, DEFAULT_ICON, DEFAULT_TITLE};
pub use ids::{BoardId, SectionId, TaskId, UserId};
pub use position::{dense_ranks, RankDirection};
pub use section::{Section, SectionWithTasks};
pub use task::Task;
pub use user::User;
