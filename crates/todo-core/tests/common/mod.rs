use std::sync::Arc;

use tempfile::TempDir;
use todo_core::{RepositoryBuilder, SqliteTodoRepository, TodoRepository};

/// Helper function to create a repository over a temporary database
pub async fn create_test_repository() -> (TempDir, SqliteTodoRepository) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let repository = RepositoryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create repository");
    (temp_dir, repository)
}

/// Same as [`create_test_repository`], erased behind the storage contract.
#[allow(dead_code)]
pub async fn create_shared_repository() -> (TempDir, Arc<dyn TodoRepository>) {
    let (temp_dir, repository) = create_test_repository().await;
    (temp_dir, Arc::new(repository))
}
