//! Section commands

mod create;
mod delete;
mod update;

pub use create::CreateSection;
pub use delete::DeleteSection;
pub use update::UpdateSection;
