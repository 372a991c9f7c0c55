//! Builder for creating and configuring repository instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::{ConnectionFactory, SqliteTodoRepository};
use crate::{
    db::Database,
    error::{Result, TodoError},
};

/// Builder for creating and configuring [`SqliteTodoRepository`] instances.
#[derive(Debug, Clone, Default)]
pub struct RepositoryBuilder {
    database_path: Option<PathBuf>,
}

impl RepositoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/todo/todo.db` or `~/.local/share/todo/todo.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the repository, creating the database file and schema if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::FileSystem` if the parent directory cannot be
    /// created, `TodoError::XdgDirectory` if no default path can be resolved,
    /// and `TodoError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<SqliteTodoRepository> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TodoError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop)).await??;

        info!("Using database at {}", db_path.display());
        Ok(SqliteTodoRepository::new(ConnectionFactory::new(db_path)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("todo")
            .place_data_file("todo.db")
            .map_err(|e| TodoError::XdgDirectory(e.to_string()))
    }
}
