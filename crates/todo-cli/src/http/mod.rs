//! HTTP boundary for the todo service
//!
//! Exposes the dispatcher over a JSON API built with axum. Route handlers
//! only translate between the wire and [`Request`](todo_core::Request)
//! values; every failure leaves through [`errors::ApiError`], which maps
//! the error kind to a status code.
//!
//! | Method | Path                          | Success |
//! |--------|-------------------------------|---------|
//! | GET    | `/api/todos`                  | 200     |
//! | GET    | `/api/todos/completed`        | 200     |
//! | GET    | `/api/todos/incomplete`       | 200     |
//! | GET    | `/api/todos/{id}`             | 200     |
//! | POST   | `/api/todos`                  | 201     |
//! | PUT    | `/api/todos/{id}`             | 200     |
//! | DELETE | `/api/todos/{id}`             | 204     |
//! | PATCH  | `/api/todos/{id}/complete`    | 200     |
//! | PATCH  | `/api/todos/{id}/incomplete`  | 200     |
//! | GET    | `/health`                     | 200     |

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    routing::{get, patch},
    Router,
};
use log::{info, warn};
use todo_core::Dispatcher;
use tokio::{
    net::TcpListener,
    signal::unix::{signal, SignalKind},
};

pub mod errors;
pub mod handlers;

/// Shared state of every route: the validated dispatch table.
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<Dispatcher>,
}

/// Builds the API router over a dispatcher.
pub fn router(dispatcher: Dispatcher) -> Router {
    let state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route("/api/todos/completed", get(handlers::list_completed))
        .route("/api/todos/incomplete", get(handlers::list_incomplete))
        .route(
            "/api/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/api/todos/:id/complete", patch(handlers::complete_todo))
        .route("/api/todos/:id/incomplete", patch(handlers::incomplete_todo))
        .with_state(state)
}

/// Serves the API on `addr` until SIGINT or SIGTERM.
pub async fn serve(addr: SocketAddr, dispatcher: Dispatcher) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(dispatcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let (mut sigint, mut sigterm) = match (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) {
        (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
        _ => {
            // Without handlers we can still stop on Ctrl-C.
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {e}");
            }
            return;
        }
    };

    tokio::select! {
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }
}
