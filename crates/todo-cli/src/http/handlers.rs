//! Route handlers. Each one translates HTTP input into a [`Request`],
//! dispatches it, and shapes the [`Response`](todo_core::Response) for the
//! wire.

use std::str::FromStr;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use jiff::Timestamp;
use log::info;
use serde::{Deserialize, Serialize};
use todo_core::{
    params::{CreateTodo, Id, UpdateTodo},
    Request, TodoId, TodoItem,
};

use super::{errors::ApiError, AppState};

type ApiResult<T> = Result<T, ApiError>;

/// Body of `PUT /api/todos/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
}

impl UpdateTodoBody {
    fn into_params(self, id: TodoId) -> UpdateTodo {
        UpdateTodo {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            due_date: self.due_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
}

fn parse_id(raw: &str) -> ApiResult<Id> {
    Ok(Id {
        id: TodoId::from_str(raw)?,
    })
}

pub async fn health() -> impl IntoResponse {
    Json(HealthBody { status: "ok" })
}

pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoItem>>> {
    info!("Getting all todo items");
    list(&state, Request::GetAllTodos).await
}

pub async fn list_completed(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoItem>>> {
    info!("Getting completed todo items");
    list(&state, Request::GetCompletedTodos).await
}

pub async fn list_incomplete(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoItem>>> {
    info!("Getting incomplete todo items");
    list(&state, Request::GetIncompleteTodos).await
}

async fn list(state: &AppState, request: Request) -> ApiResult<Json<Vec<TodoItem>>> {
    let todos = state.dispatcher.dispatch(request).await?.into_todos()?;
    Ok(Json(todos))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoItem>> {
    info!("Getting todo item {id}");
    let params = parse_id(&id)?;
    let item = state
        .dispatcher
        .dispatch(Request::GetTodoById(params))
        .await?
        .into_todo()?;
    Ok(Json(item))
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(params) = payload?;
    info!("Creating todo item '{}'", params.title);

    let item = state
        .dispatcher
        .dispatch(Request::CreateTodo(params))
        .await?
        .into_todo()?;

    let location = format!("/api/todos/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoBody>, JsonRejection>,
) -> ApiResult<Json<TodoItem>> {
    info!("Updating todo item {id}");
    let Id { id } = parse_id(&id)?;
    let Json(body) = payload?;

    let item = state
        .dispatcher
        .dispatch(Request::UpdateTodo(body.into_params(id)))
        .await?
        .into_todo()?;
    Ok(Json(item))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    info!("Deleting todo item {id}");
    let params = parse_id(&id)?;
    state
        .dispatcher
        .dispatch(Request::DeleteTodo(params))
        .await?
        .into_deleted()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoItem>> {
    info!("Marking todo item {id} as completed");
    let params = parse_id(&id)?;
    let item = state
        .dispatcher
        .dispatch(Request::CompleteTodo(params))
        .await?
        .into_todo()?;
    Ok(Json(item))
}

pub async fn incomplete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoItem>> {
    info!("Marking todo item {id} as incomplete");
    let params = parse_id(&id)?;
    let item = state
        .dispatcher
        .dispatch(Request::IncompleteTodo(params))
        .await?
        .into_todo()?;
    Ok(Json(item))
}
