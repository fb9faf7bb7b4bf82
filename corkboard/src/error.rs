//! Error types for the corkboard engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for corkboard operations
pub type Result<T> = std::result::Result<T, CorkboardError>;

/// Errors that can occur in corkboard operations
#[derive(Debug, Error)]
pub enum CorkboardError {
    /// Store not initialized at the given path
    #[error("store not initialized at {path}")]
    NotInitialized { path: PathBuf },

    /// User not found
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    /// Board not found (or not owned by the caller)
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// Section not found
    #[error("section not found: {id}")]
    SectionNotFound { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Username already registered
    #[error("username already taken: {username}")]
    UsernameTaken { username: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Lock is held by another process
    #[error("lock busy - another operation in progress")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CorkboardError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is a user-visible "not found" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. }
                | Self::BoardNotFound { .. }
                | Self::SectionNotFound { .. }
                | Self::TaskNotFound { .. }
        )
    }

    /// Check if this is a validation failure (rejected before any write)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken { .. } | Self::MissingField { .. } | Self::InvalidValue { .. }
        )
    }
}
