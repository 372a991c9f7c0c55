//! Todo CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{row_to_todo, timestamp_to_sql, TODO_COLUMNS};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{CompletionFilter, TodoId, TodoItem},
};

const INSERT_TODO_SQL: &str = "INSERT INTO todos (Id, Title, Description, IsCompleted, CreatedAt, UpdatedAt, DueDate) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TODO_SQL: &str = "UPDATE todos SET Title = ?1, Description = ?2, IsCompleted = ?3, UpdatedAt = ?4, DueDate = ?5 WHERE Id = ?6";
const SET_COMPLETION_SQL: &str = "UPDATE todos SET IsCompleted = ?1, UpdatedAt = ?2 WHERE Id = ?3";
const DELETE_TODO_SQL: &str = "DELETE FROM todos WHERE Id = ?1";

impl super::Database {
    /// Lists todo items matching the filter, newest first.
    pub fn list_todos(&self, filter: CompletionFilter) -> Result<Vec<TodoItem>> {
        let mut query = format!("SELECT {TODO_COLUMNS} FROM todos");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(completed) = filter.is_completed() {
            query.push_str(" WHERE IsCompleted = ?1");
            params_vec.push(Box::new(completed));
        }

        query.push_str(" ORDER BY CreatedAt DESC, rowid DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let todos = stmt
            .query_map(&params_refs[..], row_to_todo)
            .db_context("Failed to query todos")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read todo row")?;

        Ok(todos)
    }

    /// Retrieves a todo item by its ID.
    pub fn get_todo(&self, id: &TodoId) -> Result<Option<TodoItem>> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos WHERE Id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let todo = stmt
            .query_row(params![id.to_string()], row_to_todo)
            .optional()
            .db_context("Failed to query todo")?;

        Ok(todo)
    }

    /// Inserts a fully populated todo item.
    pub fn insert_todo(&self, item: &TodoItem) -> Result<()> {
        self.connection
            .execute(
                INSERT_TODO_SQL,
                params![
                    item.id.to_string(),
                    item.title,
                    item.description,
                    item.is_completed,
                    timestamp_to_sql(&item.created_at),
                    item.updated_at.as_ref().map(timestamp_to_sql),
                    item.due_date.as_ref().map(timestamp_to_sql),
                ],
            )
            .db_context("Failed to insert todo")?;
        Ok(())
    }

    /// Overwrites the mutable columns of the row matching `item.id`.
    ///
    /// Returns whether exactly one row was affected.
    pub fn update_todo(&self, item: &TodoItem) -> Result<bool> {
        let affected = self
            .connection
            .execute(
                UPDATE_TODO_SQL,
                params![
                    item.title,
                    item.description,
                    item.is_completed,
                    item.updated_at.as_ref().map(timestamp_to_sql),
                    item.due_date.as_ref().map(timestamp_to_sql),
                    item.id.to_string(),
                ],
            )
            .db_context("Failed to update todo")?;
        Ok(affected == 1)
    }

    /// Sets the completion flag and `UpdatedAt` in one statement.
    pub fn set_completion(&self, id: &TodoId, completed: bool, at: &Timestamp) -> Result<bool> {
        let affected = self
            .connection
            .execute(
                SET_COMPLETION_SQL,
                params![completed, timestamp_to_sql(at), id.to_string()],
            )
            .db_context("Failed to update todo completion")?;
        Ok(affected == 1)
    }

    /// Deletes the row with the given ID.
    pub fn delete_todo(&self, id: &TodoId) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_TODO_SQL, params![id.to_string()])
            .db_context("Failed to delete todo")?;
        Ok(affected == 1)
    }
}
