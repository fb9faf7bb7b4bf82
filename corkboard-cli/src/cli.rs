//! CLI definition for the corkboard command-line interface.
//!
//! This module only depends on `clap` and `std`, so the argument surface
//! stays easy to audit in one place.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Corkboard - file-backed board, section, and task management
#[derive(Parser, Debug)]
#[command(name = "corkboard")]
#[command(version)]
#[command(about = "Manage boards, sections, and tasks in a .corkboard store")]
pub struct Cli {
    /// Directory containing (or to contain) the .corkboard store.
    /// Defaults to searching upward from the current directory.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the .corkboard store directories
    Init,
    /// Register a new user
    Signup {
        username: String,
        secret: String,
    },
    /// Show a user record (secret redacted)
    User {
        id: String,
    },
    /// Board commands
    #[command(subcommand)]
    Board(BoardCommands),
    /// Section commands
    #[command(subcommand)]
    Section(SectionCommands),
    /// Task commands
    #[command(subcommand)]
    Task(TaskCommands),
}

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// Create a board for a user
    Create {
        owner: String,
    },
    /// List a user's boards in display order
    List {
        owner: String,
    },
    /// List a user's favourite boards in display order
    Favourites {
        owner: String,
    },
    /// Show a board with its sections and tasks
    Show {
        id: String,
        owner: String,
    },
    /// Update board fields
    Update {
        id: String,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Set or clear the favourite flag
        #[arg(long)]
        favourite: Option<bool>,
    },
    /// Delete a board and everything on it
    Delete {
        id: String,
    },
    /// Persist a new display order for all boards.
    /// Pass every board id, first displayed first.
    Reorder {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Persist a new display order for the favourites list
    ReorderFavourites {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectionCommands {
    /// Add a section to a board
    Add {
        board: String,
    },
    /// Rename a section
    Rename {
        id: String,
        title: String,
    },
    /// Delete a section and its tasks
    Rm {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Add a task to a section
    Add {
        section: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Edit a task's title or content
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a task
    Rm {
        id: String,
    },
    /// Rewrite task positions after a drag.
    /// For a move within one section, pass the same section id twice and
    /// the same list to both --source and --destination.
    Move {
        #[arg(long)]
        source_section: String,
        #[arg(long)]
        destination_section: String,
        /// Remaining task ids of the source section, in display order
        #[arg(long, value_delimiter = ',')]
        source: Vec<String>,
        /// Task ids of the destination section, in display order
        #[arg(long, value_delimiter = ',', required = true)]
        destination: Vec<String>,
    },
}
