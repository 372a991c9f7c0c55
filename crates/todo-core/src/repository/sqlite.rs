//! SQLite implementation of [`TodoRepository`].

use std::path::PathBuf;

use async_trait::async_trait;
use jiff::Timestamp;
use log::debug;
use tokio::task;

use super::TodoRepository;
use crate::{
    db::Database,
    error::Result,
    models::{CompletionFilter, TodoId, TodoItem},
};

/// Opens connections to one SQLite database file.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    db_path: PathBuf,
}

impl ConnectionFactory {
    /// Creates a factory for the database at `db_path`.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Opens a new connection. It is closed when the returned value drops.
    pub fn connect(&self) -> Result<Database> {
        Database::open(&self.db_path)
    }
}

/// Repository backed by a SQLite file, one connection per operation.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    factory: ConnectionFactory,
}

impl SqliteTodoRepository {
    /// Creates a repository over an initialized database.
    ///
    /// Use [`RepositoryBuilder`](super::RepositoryBuilder) to resolve the path
    /// and initialize the schema first.
    pub fn new(factory: ConnectionFactory) -> Self {
        Self { factory }
    }

    /// Runs `op` on a fresh connection on the blocking pool.
    async fn with_connection<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let factory = self.factory.clone();
        task::spawn_blocking(move || {
            let db = factory.connect()?;
            op(&db)
        })
        .await?
    }

    async fn list(&self, filter: CompletionFilter) -> Result<Vec<TodoItem>> {
        let todos = self
            .with_connection(move |db| db.list_todos(filter))
            .await?;
        debug!("Listed {} todo items ({filter:?})", todos.len());
        Ok(todos)
    }

    async fn set_completion(&self, id: &TodoId, completed: bool) -> Result<bool> {
        let id = *id;
        let affected = self
            .with_connection(move |db| db.set_completion(&id, completed, &Timestamp::now()))
            .await?;
        debug!("Set completion of {id} to {completed}: affected={affected}");
        Ok(affected)
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list_all(&self) -> Result<Vec<TodoItem>> {
        self.list(CompletionFilter::All).await
    }

    async fn get_by_id(&self, id: &TodoId) -> Result<Option<TodoItem>> {
        let id = *id;
        self.with_connection(move |db| db.get_todo(&id)).await
    }

    async fn add(&self, item: TodoItem) -> Result<TodoItem> {
        let item = self
            .with_connection(move |db| {
                db.insert_todo(&item)?;
                Ok(item)
            })
            .await?;
        debug!("Inserted todo {}", item.id);
        Ok(item)
    }

    async fn update(&self, item: &TodoItem) -> Result<bool> {
        let item = item.clone();
        let id = item.id;
        let affected = self.with_connection(move |db| db.update_todo(&item)).await?;
        debug!("Updated todo {id}: affected={affected}");
        Ok(affected)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool> {
        let id = *id;
        let affected = self.with_connection(move |db| db.delete_todo(&id)).await?;
        debug!("Deleted todo {id}: affected={affected}");
        Ok(affected)
    }

    async fn list_completed(&self) -> Result<Vec<TodoItem>> {
        self.list(CompletionFilter::Completed).await
    }

    async fn list_incomplete(&self) -> Result<Vec<TodoItem>> {
        self.list(CompletionFilter::Incomplete).await
    }

    async fn mark_completed(&self, id: &TodoId) -> Result<bool> {
        self.set_completion(id, true).await
    }

    async fn mark_incomplete(&self, id: &TodoId) -> Result<bool> {
        self.set_completion(id, false).await
    }
}
