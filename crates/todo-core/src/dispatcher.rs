//! Routing of request values to their single registered handler.
//!
//! Every use case is a variant of the [`Request`] tagged union. The
//! [`Dispatcher`] holds a table from [`RequestKind`] to exactly one
//! [`Handler`]; the table is built and validated once at startup by
//! [`DispatcherBuilder`], so a duplicate or missing registration is a
//! configuration error before any request is served.
//!
//! ```rust,no_run
//! use todo_core::{params::CreateTodo, Dispatcher, Request, RepositoryBuilder};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = Arc::new(RepositoryBuilder::new().build().await?);
//! let dispatcher = Dispatcher::with_repository(repository)?;
//!
//! let item = dispatcher
//!     .dispatch(Request::CreateTodo(CreateTodo {
//!         title: "Buy milk".to_string(),
//!         ..Default::default()
//!     }))
//!     .await?
//!     .into_todo()?;
//! # Ok(())
//! # }
//! ```

use std::{collections::HashMap, fmt, sync::Arc};

use async_trait::async_trait;

use crate::{
    error::{Result, TodoError},
    handlers::{
        CompleteTodoHandler, CreateTodoHandler, DeleteTodoHandler, GetAllTodosHandler,
        GetCompletedTodosHandler, GetIncompleteTodosHandler, GetTodoByIdHandler,
        IncompleteTodoHandler, UpdateTodoHandler,
    },
    models::TodoItem,
    params::{CreateTodo, Id, UpdateTodo},
    repository::TodoRepository,
};

/// A request for one use case.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    CreateTodo(CreateTodo),
    GetTodoById(Id),
    UpdateTodo(UpdateTodo),
    DeleteTodo(Id),
    CompleteTodo(Id),
    IncompleteTodo(Id),
    GetAllTodos,
    GetCompletedTodos,
    GetIncompleteTodos,
}

/// The type of a [`Request`], used as the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    CreateTodo,
    GetTodoById,
    UpdateTodo,
    DeleteTodo,
    CompleteTodo,
    IncompleteTodo,
    GetAllTodos,
    GetCompletedTodos,
    GetIncompleteTodos,
}

impl RequestKind {
    /// Every request kind; a valid dispatch table covers all of them.
    pub const ALL: [RequestKind; 9] = [
        RequestKind::CreateTodo,
        RequestKind::GetTodoById,
        RequestKind::UpdateTodo,
        RequestKind::DeleteTodo,
        RequestKind::CompleteTodo,
        RequestKind::IncompleteTodo,
        RequestKind::GetAllTodos,
        RequestKind::GetCompletedTodos,
        RequestKind::GetIncompleteTodos,
    ];
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Request {
    /// The dispatch key of this request.
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::CreateTodo(_) => RequestKind::CreateTodo,
            Request::GetTodoById(_) => RequestKind::GetTodoById,
            Request::UpdateTodo(_) => RequestKind::UpdateTodo,
            Request::DeleteTodo(_) => RequestKind::DeleteTodo,
            Request::CompleteTodo(_) => RequestKind::CompleteTodo,
            Request::IncompleteTodo(_) => RequestKind::IncompleteTodo,
            Request::GetAllTodos => RequestKind::GetAllTodos,
            Request::GetCompletedTodos => RequestKind::GetCompletedTodos,
            Request::GetIncompleteTodos => RequestKind::GetIncompleteTodos,
        }
    }

    /// Error for a handler that received a request of another kind.
    pub(crate) fn mismatch(&self, expected: RequestKind) -> TodoError {
        TodoError::Configuration {
            message: format!(
                "Handler for {expected} received a {} request",
                self.kind()
            ),
        }
    }
}

/// The result of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Todo(TodoItem),
    Todos(Vec<TodoItem>),
    Deleted(bool),
}

impl Response {
    /// Unwraps a single item.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Configuration` when the response has another shape.
    pub fn into_todo(self) -> Result<TodoItem> {
        match self {
            Response::Todo(item) => Ok(item),
            other => Err(other.unexpected("a todo item")),
        }
    }

    /// Unwraps a list of items.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Configuration` when the response has another shape.
    pub fn into_todos(self) -> Result<Vec<TodoItem>> {
        match self {
            Response::Todos(items) => Ok(items),
            other => Err(other.unexpected("a todo list")),
        }
    }

    /// Unwraps a deletion outcome.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Configuration` when the response has another shape.
    pub fn into_deleted(self) -> Result<bool> {
        match self {
            Response::Deleted(deleted) => Ok(deleted),
            other => Err(other.unexpected("a deletion result")),
        }
    }

    fn unexpected(&self, wanted: &str) -> TodoError {
        let got = match self {
            Response::Todo(_) => "a todo item",
            Response::Todos(_) => "a todo list",
            Response::Deleted(_) => "a deletion result",
        };
        TodoError::Configuration {
            message: format!("Expected {wanted}, got {got}"),
        }
    }
}

/// A use case that can be registered with the [`Dispatcher`].
#[async_trait]
pub trait Handler: Send + Sync {
    /// The single request kind this handler serves.
    fn kind(&self) -> RequestKind;

    /// Handles a request of [`Handler::kind`].
    async fn handle(&self, request: Request) -> Result<Response>;
}

/// Collects handlers and validates the dispatch table.
#[derive(Default)]
pub struct DispatcherBuilder {
    handlers: HashMap<RequestKind, Arc<dyn Handler>>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under its [`Handler::kind`].
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Configuration` if a handler is already registered
    /// for the same kind.
    pub fn register<H: Handler + 'static>(mut self, handler: H) -> Result<Self> {
        let kind = handler.kind();
        if self.handlers.contains_key(&kind) {
            return Err(TodoError::Configuration {
                message: format!("Duplicate handler registered for {kind}"),
            });
        }
        self.handlers.insert(kind, Arc::new(handler));
        Ok(self)
    }

    /// Finishes the table.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Configuration` naming every request kind that has
    /// no handler.
    pub fn build(self) -> Result<Dispatcher> {
        let missing: Vec<String> = RequestKind::ALL
            .iter()
            .filter(|kind| !self.handlers.contains_key(*kind))
            .map(ToString::to_string)
            .collect();

        if !missing.is_empty() {
            return Err(TodoError::Configuration {
                message: format!("No handler registered for {}", missing.join(", ")),
            });
        }

        Ok(Dispatcher {
            handlers: self.handlers,
        })
    }
}

/// Routes each [`Request`] to its registered [`Handler`].
#[derive(Clone)]
pub struct Dispatcher {
    handlers: HashMap<RequestKind, Arc<dyn Handler>>,
}

impl Dispatcher {
    /// Starts an empty dispatch table.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Wires every default handler over the given repository.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Configuration` if the table is invalid.
    pub fn with_repository(repository: Arc<dyn TodoRepository>) -> Result<Self> {
        Self::builder()
            .register(CreateTodoHandler::new(repository.clone()))?
            .register(GetTodoByIdHandler::new(repository.clone()))?
            .register(UpdateTodoHandler::new(repository.clone()))?
            .register(DeleteTodoHandler::new(repository.clone()))?
            .register(CompleteTodoHandler::new(repository.clone()))?
            .register(IncompleteTodoHandler::new(repository.clone()))?
            .register(GetAllTodosHandler::new(repository.clone()))?
            .register(GetCompletedTodosHandler::new(repository.clone()))?
            .register(GetIncompleteTodosHandler::new(repository))?
            .build()
    }

    /// Invokes the handler registered for the request's kind and returns its
    /// result or failure unchanged.
    pub async fn dispatch(&self, request: Request) -> Result<Response> {
        let kind = request.kind();
        let handler = self.handlers.get(&kind).ok_or_else(|| TodoError::Configuration {
            message: format!("No handler registered for {kind}"),
        })?;
        handler.handle(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingHandler {
        kind: RequestKind,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler for CountingHandler {
        fn kind(&self) -> RequestKind {
            self.kind
        }

        async fn handle(&self, _request: Request) -> Result<Response> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Response::Todos(Vec::new()))
        }
    }

    struct NotFoundHandler;

    #[async_trait]
    impl Handler for NotFoundHandler {
        fn kind(&self) -> RequestKind {
            RequestKind::GetTodoById
        }

        async fn handle(&self, request: Request) -> Result<Response> {
            match request {
                Request::GetTodoById(params) => Err(TodoError::not_found(params.id)),
                other => Err(other.mismatch(self.kind())),
            }
        }
    }

    fn counting(kind: RequestKind, calls: &Arc<AtomicUsize>) -> CountingHandler {
        CountingHandler {
            kind,
            calls: calls.clone(),
        }
    }

    fn full_builder(calls: &Arc<AtomicUsize>, except: RequestKind) -> DispatcherBuilder {
        RequestKind::ALL
            .iter()
            .filter(|kind| **kind != except)
            .fold(DispatcherBuilder::new(), |builder, kind| {
                builder.register(counting(*kind, calls)).unwrap()
            })
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = DispatcherBuilder::new()
            .register(counting(RequestKind::GetAllTodos, &calls))
            .unwrap()
            .register(counting(RequestKind::GetAllTodos, &calls));

        match result {
            Err(TodoError::Configuration { message }) => {
                assert!(message.contains("GetAllTodos"), "{message}")
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("duplicate registration should fail"),
        }
    }

    #[test]
    fn test_missing_handler_is_rejected_at_build() {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = full_builder(&calls, RequestKind::IncompleteTodo).build();

        match result {
            Err(TodoError::Configuration { message }) => {
                assert!(message.contains("IncompleteTodo"), "{message}")
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("incomplete table should fail"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_single_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let listed = Arc::new(AtomicUsize::new(0));
        let dispatcher = full_builder(&calls, RequestKind::GetAllTodos)
            .register(counting(RequestKind::GetAllTodos, &listed))
            .unwrap()
            .build()
            .unwrap();

        let response = dispatcher.dispatch(Request::GetAllTodos).await.unwrap();

        assert_eq!(response, Response::Todos(Vec::new()));
        assert_eq!(listed.load(Ordering::SeqCst), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dispatch_propagates_typed_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = full_builder(&calls, RequestKind::GetTodoById)
            .register(NotFoundHandler)
            .unwrap()
            .build()
            .unwrap();

        let id = crate::models::TodoId::new();
        let err = dispatcher
            .dispatch(Request::GetTodoById(Id { id }))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), format!("TodoItem with ID {id} was not found."));
    }

    #[test]
    fn test_request_kind_matches_variant() {
        let id = Id {
            id: crate::models::TodoId::new(),
        };
        assert_eq!(Request::DeleteTodo(id).kind(), RequestKind::DeleteTodo);
        assert_eq!(Request::CompleteTodo(id).kind(), RequestKind::CompleteTodo);
        assert_eq!(
            Request::GetCompletedTodos.kind(),
            RequestKind::GetCompletedTodos
        );
    }

    #[test]
    fn test_response_accessors_reject_other_shapes() {
        let err = Response::Deleted(true).into_todo().unwrap_err();
        assert!(matches!(err, TodoError::Configuration { .. }));
        assert_eq!(err.kind(), crate::error::ErrorKind::Unexpected);
        assert!(Response::Todos(Vec::new()).into_deleted().is_err());
        assert!(Response::Deleted(true).into_deleted().unwrap());
        assert!(Response::Todos(Vec::new()).into_todos().unwrap().is_empty());
    }
}
