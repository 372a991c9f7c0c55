//! Terminal subcommands
//!
//! Each subcommand has a clap argument struct that converts into the core
//! parameter type, keeping clap attributes out of `todo_core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Request → Dispatcher
//! ```
//!
//! [`Cli`] runs the converted request and renders the result as markdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Args;
use jiff::Timestamp;
use todo_core::{
    display::TodoList,
    params::{CreateTodo, Id, ListTodos, UpdateTodo},
    CompletionFilter, Dispatcher, Request, TodoId,
};

use crate::{args::DEFAULT_BIND_ADDR, renderer::TerminalRenderer};

/// Create a new todo item
#[derive(Args)]
pub struct AddArgs {
    /// Title of the item (1-255 characters)
    pub title: String,
    #[arg(short, long, help = "Optional description of the item")]
    pub description: Option<String>,
    #[arg(
        long,
        help = "Optional due date as an RFC 3339 timestamp, e.g. 2030-01-01T09:00:00Z"
    )]
    pub due: Option<Timestamp>,
}

impl From<AddArgs> for CreateTodo {
    fn from(val: AddArgs) -> Self {
        CreateTodo {
            title: val.title,
            description: val.description,
            due_date: val.due,
        }
    }
}

/// List todo items
#[derive(Args)]
pub struct ListArgs {
    #[arg(long, conflicts_with = "incomplete", help = "Only completed items")]
    pub completed: bool,
    #[arg(long, help = "Only items that are not completed")]
    pub incomplete: bool,
}

impl From<ListArgs> for ListTodos {
    fn from(val: ListArgs) -> Self {
        let filter = match (val.completed, val.incomplete) {
            (true, _) => CompletionFilter::Completed,
            (_, true) => CompletionFilter::Incomplete,
            _ => CompletionFilter::All,
        };
        ListTodos { filter }
    }
}

/// Show a todo item
#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "ID of the todo item")]
    pub id: TodoId,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a todo item
///
/// Only the options that are given are changed. An empty title or
/// description keeps the stored value.
#[derive(Args)]
pub struct UpdateArgs {
    #[arg(help = "ID of the todo item to update")]
    pub id: TodoId,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(long, help = "New due date as an RFC 3339 timestamp")]
    pub due: Option<Timestamp>,
}

impl From<UpdateArgs> for UpdateTodo {
    fn from(val: UpdateArgs) -> Self {
        UpdateTodo {
            id: val.id,
            title: val.title.unwrap_or_default(),
            description: val.description,
            due_date: val.due,
        }
    }
}

/// Mark a todo item as completed
#[derive(Args)]
pub struct CompleteArgs {
    #[arg(help = "ID of the todo item to complete")]
    pub id: TodoId,
}

impl From<CompleteArgs> for Id {
    fn from(val: CompleteArgs) -> Self {
        Id { id: val.id }
    }
}

/// Mark a todo item as not completed
#[derive(Args)]
pub struct ReopenArgs {
    #[arg(help = "ID of the todo item to reopen")]
    pub id: TodoId,
}

impl From<ReopenArgs> for Id {
    fn from(val: ReopenArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a todo item
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "ID of the todo item to delete")]
    pub id: TodoId,
}

impl From<DeleteArgs> for Id {
    fn from(val: DeleteArgs) -> Self {
        Id { id: val.id }
    }
}

/// Start the HTTP server
#[derive(Args)]
pub struct ServeArgs {
    #[arg(
        long,
        env = "TODO_BIND_ADDR",
        default_value = DEFAULT_BIND_ADDR,
        help = "Address to listen on"
    )]
    pub bind: SocketAddr,
}

/// Runs terminal subcommands through the dispatcher.
pub struct Cli {
    dispatcher: Dispatcher,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(dispatcher: Dispatcher, renderer: TerminalRenderer) -> Self {
        Self {
            dispatcher,
            renderer,
        }
    }

    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let item = self
            .dispatcher
            .dispatch(Request::CreateTodo(args.into()))
            .await?
            .into_todo()?;
        self.renderer
            .render(&format!("Created todo with ID: {}\n\n{item}", item.id))
    }

    pub async fn list(&self, params: ListTodos) -> Result<()> {
        let request = match params.filter {
            CompletionFilter::All => Request::GetAllTodos,
            CompletionFilter::Completed => Request::GetCompletedTodos,
            CompletionFilter::Incomplete => Request::GetIncompleteTodos,
        };
        let todos = self
            .dispatcher
            .dispatch(request)
            .await
            .with_context(|| format!("Failed to list {} todos", params.filter))?
            .into_todos()?;
        self.renderer.render(&TodoList::from(todos).to_string())
    }

    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let item = self
            .dispatcher
            .dispatch(Request::GetTodoById(args.into()))
            .await?
            .into_todo()?;
        self.renderer.render(&item.to_string())
    }

    pub async fn update(&self, args: UpdateArgs) -> Result<()> {
        let item = self
            .dispatcher
            .dispatch(Request::UpdateTodo(args.into()))
            .await?
            .into_todo()?;
        self.renderer
            .render(&format!("Updated todo with ID: {}\n\n{item}", item.id))
    }

    pub async fn complete(&self, args: CompleteArgs) -> Result<()> {
        let item = self
            .dispatcher
            .dispatch(Request::CompleteTodo(args.into()))
            .await?
            .into_todo()?;
        self.renderer.render(&item.to_string())
    }

    pub async fn reopen(&self, args: ReopenArgs) -> Result<()> {
        let item = self
            .dispatcher
            .dispatch(Request::IncompleteTodo(args.into()))
            .await?
            .into_todo()?;
        self.renderer.render(&item.to_string())
    }

    pub async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let params: Id = args.into();
        self.dispatcher
            .dispatch(Request::DeleteTodo(params))
            .await?
            .into_deleted()?;
        self.renderer
            .render(&format!("Deleted todo with ID: {}\n", params.id))
    }
}
