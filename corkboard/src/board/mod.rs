//! Board commands: creation, ordered reads, the two reorder axes,
//! field updates with favourite side-effects, cascading delete, and the
//! owner-scoped board detail aggregate.

mod create;
mod delete;
mod favourites;
mod get;
mod list;
mod reorder;
mod update;

pub use create::CreateBoard;
pub use delete::DeleteBoard;
pub use favourites::{ListFavourites, ReorderFavourites};
pub use get::GetBoardDetail;
pub use list::ListBoards;
pub use reorder::ReorderBoards;
pub use update::UpdateBoard;
