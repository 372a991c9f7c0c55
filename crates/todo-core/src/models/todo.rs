//! Todo item model definition and identifier type.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TodoError;

/// Opaque, globally unique identifier of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|e| {
            TodoError::invalid_input("id").with_reason(format!("'{s}' is not a valid ID: {e}"))
        })
    }
}

/// Represents a single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, assigned at creation
    pub id: TodoId,

    /// Title of the todo item
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Whether the item has been completed
    pub is_completed: bool,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last mutation, absent until the first update
    pub updated_at: Option<Timestamp>,

    /// Optional due date
    pub due_date: Option<Timestamp>,
}

impl TodoItem {
    /// Creates a new, incomplete item with a fresh id and `created_at` set to
    /// now.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        due_date: Option<Timestamp>,
    ) -> Self {
        Self {
            id: TodoId::new(),
            title: title.into(),
            description,
            is_completed: false,
            created_at: Timestamp::now(),
            updated_at: None,
            due_date,
        }
    }

    /// Records a mutation at the given instant.
    pub fn touch(&mut self, at: Timestamp) {
        self.updated_at = Some(at);
    }
}
