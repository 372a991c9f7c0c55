//! Todo service binary
//!
//! Runs either a single terminal subcommand or, with `serve`, the HTTP API.
//! Both go through one [`Dispatcher`] wired at startup, so a bad handler
//! table stops the process before anything is served.

mod args;
mod cli;
mod http;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use todo_core::{params::ListTodos, Dispatcher, RepositoryBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let repository = RepositoryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize repository")?;

    let dispatcher = Dispatcher::with_repository(Arc::new(repository))
        .context("Failed to wire request handlers")?;

    info!("Todo started");

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Add(args)) => Cli::new(dispatcher, renderer).add(args).await,
        Some(List(args)) => Cli::new(dispatcher, renderer).list(args.into()).await,
        Some(Show(args)) => Cli::new(dispatcher, renderer).show(args).await,
        Some(Update(args)) => Cli::new(dispatcher, renderer).update(args).await,
        Some(Complete(args)) => Cli::new(dispatcher, renderer).complete(args).await,
        Some(Reopen(args)) => Cli::new(dispatcher, renderer).reopen(args).await,
        Some(Delete(args)) => Cli::new(dispatcher, renderer).delete(args).await,
        Some(Serve(args)) => {
            info!("Starting HTTP server");
            http::serve(args.bind, dispatcher).await
        }
        None => {
            Cli::new(dispatcher, renderer)
                .list(ListTodos::default())
                .await
        }
    }
}
