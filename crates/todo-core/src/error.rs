//! Error types for the todo library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all todo operations.
#[derive(Error, Debug)]
pub enum TodoError {
    /// The requested todo item does not exist
    #[error("TodoItem with ID {id} was not found.")]
    NotFound { id: String },
    /// The operation was rejected or failed for a domain reason
    #[error("{message}")]
    Operation { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Database connection, constraint or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors, including an invalid handler table
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A blocking storage task failed to complete
    #[error("Task join error: {message}")]
    TaskJoin { message: String },
}

/// Coarse classification used by boundary adapters to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested entity is absent
    NotFound,
    /// Rejected for a domain reason (validation, zero rows affected)
    Domain,
    /// Storage, configuration or runtime failure
    Unexpected,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TodoError {
        TodoError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TodoError {
        TodoError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TodoError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Not-found error for the given item id.
    pub fn not_found(id: impl ToString) -> Self {
        TodoError::NotFound { id: id.to_string() }
    }

    /// Domain failure with a message.
    pub fn operation(message: impl Into<String>) -> Self {
        TodoError::Operation {
            message: message.into(),
        }
    }

    /// Classifies the error for boundary adapters.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::NotFound { .. } => ErrorKind::NotFound,
            TodoError::Operation { .. } | TodoError::InvalidInput { .. } => ErrorKind::Domain,
            TodoError::Database { .. }
            | TodoError::FileSystem { .. }
            | TodoError::XdgDirectory(_)
            | TodoError::Configuration { .. }
            | TodoError::TaskJoin { .. } => ErrorKind::Unexpected,
        }
    }

    /// Returns true for [`TodoError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<tokio::task::JoinError> for TodoError {
    fn from(e: tokio::task::JoinError) -> Self {
        TodoError::TaskJoin {
            message: e.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TodoError::database(message).with_source(e))
    }
}

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_item() {
        let err = TodoError::not_found("abc");
        assert_eq!(err.to_string(), "TodoItem with ID abc was not found.");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(TodoError::operation("nope").kind(), ErrorKind::Domain);
        assert_eq!(
            TodoError::invalid_input("title")
                .with_reason("empty")
                .kind(),
            ErrorKind::Domain
        );
        assert_eq!(
            TodoError::database("boom")
                .with_source(rusqlite::Error::QueryReturnedNoRows)
                .kind(),
            ErrorKind::Unexpected
        );
        assert_eq!(
            TodoError::Configuration {
                message: "dup".to_string()
            }
            .kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query").unwrap_err();
        match err {
            TodoError::Database { message, .. } => assert_eq!(message, "Failed to query"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
