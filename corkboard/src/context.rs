//! CorkboardContext - I/O primitives for the record store
//!
//! The context provides durable keyed records with atomic single-record
//! writes. No business logic lives here; commands do all the work. Every
//! multi-record guarantee the engine offers (or deliberately does not
//! offer) is built on top of the one primitive this file provides: a
//! single file write that is atomic via temp-file-plus-rename.

use crate::error::{CorkboardError, Result};
use crate::types::{Board, BoardId, Section, SectionId, Task, TaskId, User, UserId};
use fs2::FileExt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Context passed to every command - provides access, not logic
pub struct CorkboardContext {
    /// Path to the .corkboard directory
    root: PathBuf,
}

impl CorkboardContext {
    /// Create a new context for the given .corkboard directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a context by finding the .corkboard directory from a starting path
    pub fn find(start: impl AsRef<Path>) -> Result<Self> {
        let mut current = start.as_ref().to_path_buf();

        loop {
            let data_dir = current.join(".corkboard");
            if data_dir.is_dir() {
                return Ok(Self::new(data_dir));
            }

            if !current.pop() {
                return Err(CorkboardError::NotInitialized {
                    path: start.as_ref().to_path_buf(),
                });
            }
        }
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    /// Get the root .corkboard directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the users directory
    pub fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    /// Path to a user's JSON file
    pub fn user_path(&self, id: &UserId) -> PathBuf {
        self.users_dir().join(format!("{}.json", id))
    }

    /// Path to the boards directory
    pub fn boards_dir(&self) -> PathBuf {
        self.root.join("boards")
    }

    /// Path to a board's JSON file
    pub fn board_path(&self, id: &BoardId) -> PathBuf {
        self.boards_dir().join(format!("{}.json", id))
    }

    /// Path to the sections directory
    pub fn sections_dir(&self) -> PathBuf {
        self.root.join("sections")
    }

    /// Path to a section's JSON file
    pub fn section_path(&self, id: &SectionId) -> PathBuf {
        self.sections_dir().join(format!("{}.json", id))
    }

    /// Path to the tasks directory
    pub fn tasks_dir(&self) -> PathBuf {
        self.root.join("tasks")
    }

    /// Path to a task's JSON file
    pub fn task_path(&self, id: &TaskId) -> PathBuf {
        self.tasks_dir().join(format!("{}.json", id))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    // =========================================================================
    // Directory initialization
    // =========================================================================

    /// Check if all record directories exist
    pub fn directories_exist(&self) -> bool {
        self.root.exists()
            && self.users_dir().exists()
            && self.boards_dir().exists()
            && self.sections_dir().exists()
            && self.tasks_dir().exists()
    }

    /// Create the directory structure for a new store
    ///
    /// This is idempotent - safe to call multiple times.
    pub async fn create_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        fs::create_dir_all(self.users_dir()).await?;
        fs::create_dir_all(self.boards_dir()).await?;
        fs::create_dir_all(self.sections_dir()).await?;
        fs::create_dir_all(self.tasks_dir()).await?;
        Ok(())
    }

    /// Ensure directories exist, creating them if needed
    pub async fn ensure_directories(&self) -> Result<()> {
        if !self.directories_exist() {
            self.create_directories().await?;
        }
        Ok(())
    }

    // =========================================================================
    // User I/O
    // =========================================================================

    /// Read a user record
    pub async fn read_user(&self, id: &UserId) -> Result<User> {
        let path = self.user_path(id);
        if !path.exists() {
            return Err(CorkboardError::UserNotFound { id: id.to_string() });
        }

        let content = fs::read_to_string(&path).await?;
        let user: User = serde_json::from_str(&content)?;
        Ok(user)
    }

    /// Write a user record (atomic write via temp file)
    pub async fn write_user(&self, user: &User) -> Result<()> {
        let path = self.user_path(&user.id);
        let content = serde_json::to_string_pretty(user)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// List all user IDs by reading the users directory
    pub async fn list_user_ids(&self) -> Result<Vec<UserId>> {
        list_record_ids(&self.users_dir(), UserId::from_string).await
    }

    /// Find the user with the given username, if any
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        for id in self.list_user_ids().await? {
            let user = self.read_user(&id).await?;
            if user.username == username {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    // =========================================================================
    // Board I/O
    // =========================================================================

    /// Read a board record
    pub async fn read_board(&self, id: &BoardId) -> Result<Board> {
        let path = self.board_path(id);
        if !path.exists() {
            return Err(CorkboardError::BoardNotFound { id: id.to_string() });
        }

        let content = fs::read_to_string(&path).await?;
        let board: Board = serde_json::from_str(&content)?;
        Ok(board)
    }

    /// Write a board record (atomic write via temp file)
    pub async fn write_board(&self, board: &Board) -> Result<()> {
        let path = self.board_path(&board.id);
        let content = serde_json::to_string_pretty(board)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// Delete a board record
    pub async fn delete_board_file(&self, id: &BoardId) -> Result<()> {
        let path = self.board_path(id);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// List all board IDs by reading the boards directory
    pub async fn list_board_ids(&self) -> Result<Vec<BoardId>> {
        list_record_ids(&self.boards_dir(), BoardId::from_string).await
    }

    /// Read all boards in the store
    pub async fn read_all_boards(&self) -> Result<Vec<Board>> {
        let ids = self.list_board_ids().await?;
        let mut boards = Vec::with_capacity(ids.len());
        for id in ids {
            boards.push(self.read_board(&id).await?);
        }
        Ok(boards)
    }

    /// Count ALL boards in the store, across every owner.
    ///
    /// This is the seed for a new board's `position`; the count is
    /// deliberately not scoped per owner (see DESIGN.md).
    pub async fn count_boards(&self) -> Result<usize> {
        Ok(self.list_board_ids().await?.len())
    }

    /// Read the boards owned by `user`, unsorted
    pub async fn boards_for_user(&self, user: &UserId) -> Result<Vec<Board>> {
        let mut boards = self.read_all_boards().await?;
        boards.retain(|b| &b.user == user);
        Ok(boards)
    }

    /// Read the favourite boards owned by `user`, unsorted
    pub async fn favourites_for_user(&self, user: &UserId) -> Result<Vec<Board>> {
        let mut boards = self.boards_for_user(user).await?;
        boards.retain(|b| b.favourite);
        Ok(boards)
    }

    // =========================================================================
    // Section I/O
    // =========================================================================

    /// Read a section record
    pub async fn read_section(&self, id: &SectionId) -> Result<Section> {
        let path = self.section_path(id);
        if !path.exists() {
            return Err(CorkboardError::SectionNotFound { id: id.to_string() });
        }

        let content = fs::read_to_string(&path).await?;
        let section: Section = serde_json::from_str(&content)?;
        Ok(section)
    }

    /// Write a section record (atomic write via temp file)
    pub async fn write_section(&self, section: &Section) -> Result<()> {
        let path = self.section_path(&section.id);
        let content = serde_json::to_string_pretty(section)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// Delete a section record
    pub async fn delete_section_file(&self, id: &SectionId) -> Result<()> {
        let path = self.section_path(id);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// List all section IDs by reading the sections directory
    pub async fn list_section_ids(&self) -> Result<Vec<SectionId>> {
        list_record_ids(&self.sections_dir(), SectionId::from_string).await
    }

    /// Read the sections of `board` in creation (id) order
    pub async fn sections_for_board(&self, board: &BoardId) -> Result<Vec<Section>> {
        let mut ids = self.list_section_ids().await?;
        ids.sort();

        let mut sections = Vec::new();
        for id in ids {
            let section = self.read_section(&id).await?;
            if &section.board == board {
                sections.push(section);
            }
        }
        Ok(sections)
    }

    // =========================================================================
    // Task I/O
    // =========================================================================

    /// Read a task record
    pub async fn read_task(&self, id: &TaskId) -> Result<Task> {
        let path = self.task_path(id);
        if !path.exists() {
            return Err(CorkboardError::TaskNotFound { id: id.to_string() });
        }

        let content = fs::read_to_string(&path).await?;
        let task: Task = serde_json::from_str(&content)?;
        Ok(task)
    }

    /// Write a task record (atomic write via temp file)
    pub async fn write_task(&self, task: &Task) -> Result<()> {
        let path = self.task_path(&task.id);
        let content = serde_json::to_string_pretty(task)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// Delete a task record
    pub async fn delete_task_file(&self, id: &TaskId) -> Result<()> {
        let path = self.task_path(id);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// List all task IDs by reading the tasks directory
    pub async fn list_task_ids(&self) -> Result<Vec<TaskId>> {
        list_record_ids(&self.tasks_dir(), TaskId::from_string).await
    }

    /// Read the tasks belonging to `section`, unsorted
    pub async fn tasks_for_section(&self, section: &SectionId) -> Result<Vec<Task>> {
        let ids = self.list_task_ids().await?;
        let mut tasks = Vec::new();
        for id in ids {
            let task = self.read_task(&id).await?;
            if &task.section == section {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    /// Delete every task belonging to `section`; returns how many went
    pub async fn delete_tasks_for_section(&self, section: &SectionId) -> Result<usize> {
        let tasks = self.tasks_for_section(section).await?;
        let count = tasks.len();
        for task in tasks {
            self.delete_task_file(&task.id).await?;
        }
        Ok(count)
    }

    // =========================================================================
    // Locking
    // =========================================================================

    /// Try to acquire an exclusive store lock (non-blocking).
    ///
    /// Callers that want whole-store mutual exclusion (the CLI) take this
    /// around mutating commands. The engine itself never locks across the
    /// per-record writes of a reconciliation.
    pub async fn lock(&self) -> Result<CorkboardLock> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(CorkboardLock { file }),
            Err(_) => Err(CorkboardError::LockBusy),
        }
    }
}

/// RAII lock guard - releases on drop
#[derive(Debug)]
pub struct CorkboardLock {
    file: std::fs::File,
}

impl Drop for CorkboardLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Collect record ids from the `{id}.json` files in a directory
async fn list_record_ids<I>(dir: &Path, make: impl Fn(String) -> I) -> Result<Vec<I>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut ids = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(make(stem.to_string()));
            }
        }
    }

    Ok(ids)
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    // Write to temp file in same directory
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path).await?;

    Ok(())
}
