//! Conversions between stored column values and domain types.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::models::{TodoId, TodoItem};

/// Column list shared by every todo query, in row-mapping order.
pub(crate) const TODO_COLUMNS: &str =
    "Id, Title, Description, IsCompleted, CreatedAt, UpdatedAt, DueDate";

/// Formats a timestamp for storage.
///
/// Fixed nanosecond precision keeps lexical and chronological order equal.
pub(crate) fn timestamp_to_sql(ts: &Timestamp) -> String {
    format!("{ts:.9}")
}

fn conversion_error(
    index: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
}

fn timestamp_at(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(index, e))
}

fn optional_timestamp_at(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<Timestamp>> {
    row.get::<_, Option<String>>(index)?
        .map(|s| s.parse::<Timestamp>().map_err(|e| conversion_error(index, e)))
        .transpose()
}

/// Maps a row selected with [`TODO_COLUMNS`] to a [`TodoItem`].
pub(crate) fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
    let id = row
        .get::<_, String>(0)?
        .parse::<TodoId>()
        .map_err(|e| conversion_error(0, e))?;

    Ok(TodoItem {
        id,
        title: row.get(1)?,
        description: row.get(2)?,
        is_completed: row.get(3)?,
        created_at: timestamp_at(row, 4)?,
        updated_at: optional_timestamp_at(row, 5)?,
        due_date: optional_timestamp_at(row, 6)?,
    })
}
