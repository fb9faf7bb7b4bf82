//! Task commands

mod create;
mod delete;
mod mv;
mod update;

pub use create::CreateTask;
pub use delete::DeleteTask;
pub use mv::MoveTasks;
pub use update::UpdateTask;
