//! Error types for todo-core

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum TodoError {
    /// Input failed validation (empty title, malformed shape)
    #[error("{0}")]
    Validation(String),

    /// No item with the given id
    #[error("todo not found: {0}")]
    NotFound(u64),

    /// Loading or saving the backing file failed
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl TodoError {
    pub(crate) fn title_required() -> Self {
        TodoError::Validation("title is required".to_string())
    }
}

/// Persistence-specific errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        PersistenceError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        TodoError::Persistence(PersistenceError::Io(err.to_string()))
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Persistence(PersistenceError::Serialization(err.to_string()))
    }
}
