//! Corkboard engine with file-backed storage
//!
//! This crate maintains the ordinal positions of a multi-user board
//! application: every board carries a dense zero-based `position`,
//! favourited boards carry an independent `favourite_position`, and
//! every task carries a dense position within its section. All records
//! are stored as individual JSON files under a `.corkboard` directory,
//! with concurrent access guarded by a file lock.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use corkboard::{
//!     board::CreateBoard, user::CreateUser, CorkboardContext, Execute,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = CorkboardContext::new("/path/to/data/.corkboard");
//! ctx.ensure_directories().await?;
//!
//! let user = CreateUser::new("alice", "hunter2").execute(&ctx).await?;
//! let board = CreateBoard::new(user.id).execute(&ctx).await?;
//! println!("created board {} at position {}", board.id, board.position);
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! data/
//! └── .corkboard/
//!     ├── .lock                # Advisory writer lock
//!     ├── users/
//!     │   └── {id}.json        # User record
//!     ├── boards/
//!     │   └── {id}.json        # Board record (position, favourite_position)
//!     ├── sections/
//!     │   └── {id}.json        # Section record
//!     └── tasks/
//!         └── {id}.json        # Task record (section, position)
//! ```
//!
//! Record ids are ULIDs, so directory listings sort by creation time.
//! Ordered reads sort by the stored position fields, descending for
//! rendered lists; reorder commands rewrite dense ranks over the full
//! list they are handed.

mod cascade;
mod context;
mod error;
mod operation;
pub mod types;

// Command modules
pub mod board;
pub mod client;
pub mod section;
pub mod task;
pub mod user;

pub use cascade::{delete_board_tree, delete_section_tree};
pub use context::{CorkboardContext, CorkboardLock};
pub use error::{CorkboardError, Result};
pub use operation::Execute;

// Re-export commonly used types
pub use types::{
    Board, BoardDetail, BoardId, Section, SectionId, SectionWithTasks, Task, TaskId, User, UserId,
};
