//! Command handlers: the use cases that mutate todo items.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use log::info;

use crate::{
    dispatcher::{Handler, Request, RequestKind, Response},
    error::{Result, TodoError},
    models::TodoItem,
    params::{is_blank, CreateTodo, Id, UpdateTodo},
    repository::TodoRepository,
};

/// Creates a new todo item.
pub struct CreateTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl CreateTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Validates the request, assigns a new id and `created_at`, and
    /// persists the item as incomplete.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` for a blank or overlong title and
    /// `TodoError::Database` if persisting fails.
    pub async fn handle(&self, params: &CreateTodo) -> Result<TodoItem> {
        params.validate()?;

        let item = TodoItem::new(
            params.title.clone(),
            params.description.clone(),
            params.due_date,
        );
        let item = self.repository.add(item).await?;

        info!("Created todo {}", item.id);
        Ok(item)
    }
}

/// Applies a sparse update to an existing todo item.
pub struct UpdateTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl UpdateTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Loads the item and overwrites only the fields that were supplied.
    ///
    /// A blank title or description leaves the stored value unchanged and a
    /// missing due date keeps the stored one. Completion state is never
    /// touched here.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if the item does not exist and
    /// `TodoError::Operation` if storage reports that no row was updated.
    pub async fn handle(&self, params: &UpdateTodo) -> Result<TodoItem> {
        params.validate()?;

        let mut item = self
            .repository
            .get_by_id(&params.id)
            .await?
            .ok_or_else(|| TodoError::not_found(params.id))?;

        if !is_blank(Some(&params.title)) {
            item.title = params.title.clone();
        }

        if !is_blank(params.description.as_deref()) {
            item.description = params.description.clone();
        }

        if let Some(due_date) = params.due_date {
            item.due_date = Some(due_date);
        }

        item.touch(Timestamp::now());

        if !self.repository.update(&item).await? {
            return Err(TodoError::operation(format!(
                "Failed to update todo item with ID {}",
                params.id
            )));
        }

        info!("Updated todo {}", item.id);
        Ok(item)
    }
}

/// Deletes a todo item after confirming it exists.
pub struct DeleteTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl DeleteTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Returns whether storage reported a deleted row.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if the item is absent before deletion.
    pub async fn handle(&self, params: &Id) -> Result<bool> {
        if self.repository.get_by_id(&params.id).await?.is_none() {
            return Err(TodoError::not_found(params.id));
        }

        let deleted = self.repository.delete(&params.id).await?;
        info!("Deleted todo {}: {deleted}", params.id);
        Ok(deleted)
    }
}

/// Marks a todo item completed.
pub struct CompleteTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl CompleteTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Marks the item completed and returns the reloaded item.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if no row was affected or the item
    /// vanished before it could be reloaded.
    pub async fn handle(&self, params: &Id) -> Result<TodoItem> {
        set_completion(self.repository.as_ref(), params, true).await
    }
}

/// Marks a todo item incomplete again.
pub struct IncompleteTodoHandler {
    repository: Arc<dyn TodoRepository>,
}

impl IncompleteTodoHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Marks the item incomplete and returns the reloaded item.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` under the same conditions as
    /// [`CompleteTodoHandler::handle`].
    pub async fn handle(&self, params: &Id) -> Result<TodoItem> {
        set_completion(self.repository.as_ref(), params, false).await
    }
}

async fn set_completion(
    repository: &dyn TodoRepository,
    params: &Id,
    completed: bool,
) -> Result<TodoItem> {
    let affected = if completed {
        repository.mark_completed(&params.id).await?
    } else {
        repository.mark_incomplete(&params.id).await?
    };

    if !affected {
        return Err(TodoError::not_found(params.id));
    }

    let item = repository
        .get_by_id(&params.id)
        .await?
        .ok_or_else(|| TodoError::not_found(params.id))?;

    info!("Set todo {} completed={completed}", item.id);
    Ok(item)
}

#[async_trait]
impl Handler for CreateTodoHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::CreateTodo
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::CreateTodo(params) => Ok(Response::Todo(
                CreateTodoHandler::handle(self, &params).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}

#[async_trait]
impl Handler for UpdateTodoHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::UpdateTodo
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::UpdateTodo(params) => Ok(Response::Todo(
                UpdateTodoHandler::handle(self, &params).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}

#[async_trait]
impl Handler for DeleteTodoHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::DeleteTodo
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::DeleteTodo(params) => Ok(Response::Deleted(
                DeleteTodoHandler::handle(self, &params).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}

#[async_trait]
impl Handler for CompleteTodoHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::CompleteTodo
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::CompleteTodo(params) => Ok(Response::Todo(
                CompleteTodoHandler::handle(self, &params).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}

#[async_trait]
impl Handler for IncompleteTodoHandler {
    fn kind(&self) -> RequestKind {
        RequestKind::IncompleteTodo
    }

    async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::IncompleteTodo(params) => Ok(Response::Todo(
                IncompleteTodoHandler::handle(self, &params).await?,
            )),
            other => Err(other.mismatch(self.kind())),
        }
    }
}
