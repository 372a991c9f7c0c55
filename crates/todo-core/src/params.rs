//! Parameter structures for todo operations
//!
//! This module contains the request shapes carried by
//! [`Request`](crate::dispatcher::Request) values. They are plain data with
//! serde derives only, so every interface (HTTP, CLI) builds the same values
//! and converts its own wire or argument types into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   HTTP Bodies   │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation that belongs to the domain (title length, non-blank titles on
//! creation) lives here as `validate` methods so handlers and interfaces
//! agree on the rules.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TodoError},
    models::{CompletionFilter, TodoId},
};

/// Maximum number of characters in a todo title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Returns true when the string is absent, empty or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn check_title(title: &str) -> Result<()> {
    // SQLite's length() stops at the first NUL, so storage would disagree
    // with the character count below.
    if title.chars().any(char::is_control) {
        return Err(TodoError::invalid_input("title")
            .with_reason("must not contain control characters"));
    }
    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(TodoError::invalid_input("title").with_reason(format!(
            "must be at most {MAX_TITLE_LENGTH} characters, got {length}"
        )));
    }
    Ok(())
}

/// Generic parameters for operations requiring just an ID.
///
/// Used by get, delete, complete and incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the todo item to operate on
    pub id: TodoId,
}

impl From<TodoId> for Id {
    fn from(id: TodoId) -> Self {
        Id { id }
    }
}

/// Parameters for creating a new todo item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    /// Title of the item (required, 1-255 characters)
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional due date
    pub due_date: Option<Timestamp>,
}

impl CreateTodo {
    /// Checks the title rules for a new item.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` when the title is blank, contains a
    /// control character or is longer than [`MAX_TITLE_LENGTH`] characters.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TodoError::invalid_input("title").with_reason("must not be empty"));
        }
        check_title(&self.title)
    }
}

/// Parameters for updating an existing todo item.
///
/// Update is a sparse merge: a blank `title` or `description` leaves the
/// stored value unchanged, and `due_date` only overwrites when present. There
/// is no way to clear a field through this request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    /// ID of the item to update
    pub id: TodoId,
    /// New title; blank means unchanged
    #[serde(default)]
    pub title: String,
    /// New description; absent or blank means unchanged
    pub description: Option<String>,
    /// New due date; absent means unchanged
    pub due_date: Option<Timestamp>,
}

impl UpdateTodo {
    /// Checks that a supplied title fits the length limit.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` when a non-blank title contains a
    /// control character or is longer than [`MAX_TITLE_LENGTH`] characters.
    pub fn validate(&self) -> Result<()> {
        if is_blank(Some(&self.title)) {
            return Ok(());
        }
        check_title(&self.title)
    }
}

/// Parameters for listing todo items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTodos {
    /// Which completion state to include
    #[serde(default)]
    pub filter: CompletionFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_blank_title() {
        let params = CreateTodo {
            title: "   ".to_string(),
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, TodoError::InvalidInput { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_create_accepts_max_length_title() {
        let params = CreateTodo {
            title: "x".repeat(MAX_TITLE_LENGTH),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_long_title() {
        let params = CreateTodo {
            title: "x".repeat(MAX_TITLE_LENGTH + 1),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        let params = CreateTodo {
            title: "é".repeat(MAX_TITLE_LENGTH),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_update_allows_blank_title() {
        let params = UpdateTodo {
            id: TodoId::new(),
            title: String::new(),
            description: None,
            due_date: None,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_long_title() {
        let params = UpdateTodo {
            id: TodoId::new(),
            title: "y".repeat(MAX_TITLE_LENGTH + 1),
            description: None,
            due_date: None,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_titles_with_nul_or_control_characters_are_rejected() {
        for title in ["\0", "\0abc", "abc\0", "line\nbreak", "\u{7f}"] {
            let create = CreateTodo {
                title: title.to_string(),
                ..Default::default()
            };
            let err = create.validate().unwrap_err();
            assert!(
                matches!(err, TodoError::InvalidInput { ref field, .. } if field == "title"),
                "create accepted {title:?}"
            );

            let update = UpdateTodo {
                id: TodoId::new(),
                title: title.to_string(),
                description: None,
                due_date: None,
            };
            assert!(update.validate().is_err(), "update accepted {title:?}");
        }
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(" \t")));
        assert!(!is_blank(Some("a")));
    }

    #[test]
    fn test_create_deserializes_camel_case_due_date() {
        let params: CreateTodo =
            serde_json::from_str(r#"{"title":"A","dueDate":"2030-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(params.title, "A");
        assert!(params.description.is_none());
        assert_eq!(
            params.due_date,
            Some("2030-01-01T00:00:00Z".parse().unwrap())
        );
    }
}
