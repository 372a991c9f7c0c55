use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddArgs, CompleteArgs, DeleteArgs, ListArgs, ReopenArgs, ServeArgs, ShowArgs, UpdateArgs,
};

/// Command-line front end and HTTP server for the todo service
///
/// Every subcommand goes through the same dispatcher as the HTTP API, so the
/// terminal and the server share one set of rules and one database.
#[derive(Parser)]
#[command(version, about, name = "todo")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/todo/todo.db
    #[arg(long, global = true, env = "TODO_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a todo item
    #[command(alias = "a")]
    Add(AddArgs),
    /// List todo items, newest first
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show a single todo item
    Show(ShowArgs),
    /// Change the title, description or due date of a todo item
    Update(UpdateArgs),
    /// Mark a todo item as completed
    #[command(alias = "done")]
    Complete(CompleteArgs),
    /// Mark a todo item as not completed
    Reopen(ReopenArgs),
    /// Delete a todo item
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Default listen address of `todo serve`.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
