//! Core library for the todo service.
//!
//! This crate holds everything below the transport boundary: the
//! [`TodoItem`] model, request parameters, the [`TodoRepository`] storage
//! contract with its SQLite adapter, one handler per use case, and the
//! [`Dispatcher`] that routes [`Request`] values to those handlers.
//!
//! # Layers
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ HTTP / CLI   │──▶│  Dispatcher  │──▶│   Handlers   │──▶│  Repository  │
//! │ (todo-cli)   │   │              │   │              │   │  (SQLite)    │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Handlers never see transport details and the repository never sees a
//! request. Failures travel back as [`TodoError`] and the boundary maps
//! [`TodoError::kind`] to its own status codes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use todo_core::{params::CreateTodo, Dispatcher, RepositoryBuilder, Request};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = RepositoryBuilder::new()
//!     .with_database_path(Some("todo.db"))
//!     .build()
//!     .await?;
//! let dispatcher = Dispatcher::with_repository(Arc::new(repository))?;
//!
//! let item = dispatcher
//!     .dispatch(Request::CreateTodo(CreateTodo {
//!         title: "Buy milk".to_string(),
//!         ..Default::default()
//!     }))
//!     .await?
//!     .into_todo()?;
//! println!("{item}");
//!
//! let open = dispatcher
//!     .dispatch(Request::GetIncompleteTodos)
//!     .await?
//!     .into_todos()?;
//! assert!(open.iter().any(|t| t.id == item.id));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod dispatcher;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;
pub mod repository;

// Re-export commonly used types
pub use db::Database;
pub use dispatcher::{Dispatcher, DispatcherBuilder, Handler, Request, RequestKind, Response};
pub use display::{LocalDateTime, TodoList};
pub use error::{ErrorKind, Result, TodoError};
pub use models::{CompletionFilter, TodoId, TodoItem};
pub use params::{CreateTodo, Id, ListTodos, UpdateTodo};
pub use repository::{ConnectionFactory, RepositoryBuilder, SqliteTodoRepository, TodoRepository};
