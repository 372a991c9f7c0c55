//! Query handlers: read-only use cases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    dispatcher::{Handler, Request, RequestKind, Response},
    error::{Result, TodoError},
    models::TodoItem,
    params::Id,
    repository::TodoRepository,
};

/// Loads a single todo item.
pub struct GetTodoByIdHandler {
    repository: Arc<dyn TodoRepository>,
}

impl GetTodoByIdHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if the item does not exist.
    pub async fn handle(&self, params: &Id) -> Result<TodoItem> {
        self.repository
            .get_by_id(&params.id)
            .await?
            .ok_or_else(|| TodoError::not_found(params.id))
    }
}

/// Lists every todo item, newest first.
pub struct GetAllTodosHandler {
    repository: Arc<dyn TodoRepository>,
}

impl GetAllTodosHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<TodoItem>> {
        self.repository.list_all().await
    }
}

/// Lists completed todo items.
pub struct GetCompletedTodosHandler {
    repository: Arc<dyn TodoRepository>,
}

impl GetCompletedTodosHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<TodoItem>> {
        self.repository.list_completed().await
    }
}

/// Lists todo items that are not completed.
pub struct GetIncompleteTodosHandler {
    repository: Arc<dyn TodoRepository>,
}

impl GetIncompleteTodosHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<TodoItem>> {
        self.repository.list_incomplete().await
    }
}

#[async_trait]
impl Handler for GetTodoByIdHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::GetTodoById
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::GetTodoById(params) => Ok(Response::Todo(
                GetTodoByIdHandler::handle(self, &params).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}

#[async_trait]
impl Handler for GetAllTodosHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::GetAllTodos
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::GetAllTodos => Ok(Response::Todos(GetAllTodosHandler::handle(self).await?)),
            other => Err(other.mismatch(self.kind())),
        }
    }
}

#[async_trait]
impl Handler for GetCompletedTodosHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::GetCompletedTodos
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::GetCompletedTodos => Ok(Response::Todos(
                GetCompletedTodosHandler::handle(self).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}

#[async_trait]
impl Handler for GetIncompleteTodosHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::GetIncompleteTodos
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::GetIncompleteTodos => Ok(Response::Todos(
                GetIncompleteTodosHandler::handle(self).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}
