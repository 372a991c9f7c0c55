//! Repository contract and its SQLite adapter.
//!
//! The [`TodoRepository`] trait is the storage boundary seen by handlers. It
//! hides SQL and connection handling entirely:
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  TodoRepository  │    │    Database     │
//! │ (crate::handlers│───▶│ (SqliteTodo-     │───▶│   (via db/)     │
//! │                 │    │  Repository)     │    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//!    Orchestration          Async boundary         One connection
//! ```
//!
//! ## Guarantees
//!
//! - Every operation is parameterized; no value is spliced into SQL text.
//! - Absence is never an error: `get_by_id` returns `None`, and the mutating
//!   operations return `false` when no row matched.
//! - `mark_completed` / `mark_incomplete` are single atomic statements, so
//!   there is no read-then-write race on completion state.
//! - Each call acquires its own connection and releases it on every exit
//!   path. Nothing is held across calls.
//!
//! # Usage
//!
//! ```rust,no_run
//! use todo_core::{models::TodoItem, RepositoryBuilder, TodoRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = RepositoryBuilder::new()
//!     .with_database_path(Some("todo.db"))
//!     .build()
//!     .await?;
//!
//! let item = repository.add(TodoItem::new("Buy milk", None, None)).await?;
//! assert!(repository.get_by_id(&item.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{TodoId, TodoItem},
};

pub mod builder;
pub mod sqlite;

pub use builder::RepositoryBuilder;
pub use sqlite::{ConnectionFactory, SqliteTodoRepository};

/// Storage abstraction over todo items.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All items, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<TodoItem>>;

    /// The item with the given id, or `None` when absent.
    async fn get_by_id(&self, id: &TodoId) -> Result<Option<TodoItem>>;

    /// Persists a fully populated item and returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Database` on constraint violation (for example a
    /// reused id) or connectivity failure.
    async fn add(&self, item: TodoItem) -> Result<TodoItem>;

    /// Overwrites title, description, completion, `updated_at` and due date
    /// of the row matching `item.id`. Returns whether exactly one row was
    /// affected.
    async fn update(&self, item: &TodoItem) -> Result<bool>;

    /// Removes the row. Returns whether a row was affected.
    async fn delete(&self, id: &TodoId) -> Result<bool>;

    /// Completed items, same ordering as [`TodoRepository::list_all`].
    async fn list_completed(&self) -> Result<Vec<TodoItem>>;

    /// Incomplete items, same ordering as [`TodoRepository::list_all`].
    async fn list_incomplete(&self) -> Result<Vec<TodoItem>>;

    /// Marks the item completed and stamps `updated_at` in one statement.
    async fn mark_completed(&self, id: &TodoId) -> Result<bool>;

    /// Marks the item incomplete and stamps `updated_at` in one statement.
    async fn mark_incomplete(&self, id: &TodoId) -> Result<bool>;
}
