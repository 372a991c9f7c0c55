//! Command and query handlers.
//!
//! Each handler implements exactly one use case over the repository. A
//! handler is constructed with an `Arc<dyn TodoRepository>` and exposes a
//! typed `handle` method for its request shape; it also implements
//! [`Handler`](crate::dispatcher::Handler) so the
//! [`Dispatcher`](crate::dispatcher::Dispatcher) can route
//! [`Request`](crate::dispatcher::Request) values to it.
//!
//! ## Handler Patterns
//!
//! ### Query Handlers
//! Return the domain object, or a list where empty is a valid result:
//! ```text
//! GetTodoByIdHandler::handle(&Id) -> Result<TodoItem>      // NotFound if absent
//! GetAllTodosHandler::handle() -> Result<Vec<TodoItem>>
//! ```
//!
//! ### Command Handlers
//! Return the created/modified object for confirmation:
//! ```text
//! CreateTodoHandler::handle(&CreateTodo) -> Result<TodoItem>
//! UpdateTodoHandler::handle(&UpdateTodo) -> Result<TodoItem>
//! DeleteTodoHandler::handle(&Id) -> Result<bool>
//! ```
//!
//! Handlers never retry and never perform more than one write, so an
//! abandoned request leaves either the whole statement applied or nothing.

pub mod commands;
pub mod queries;


pub use commands::{
    CompleteTodoHandler, CreateTodoHandler, DeleteTodoHandler, IncompleteTodoHandler,
    UpdateTodoHandler,
};
pub use queries::{
    GetAllTodosHandler, GetCompletedTodosHandler, GetIncompleteTodosHandler, GetTodoByIdHandler,
};
