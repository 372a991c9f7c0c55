//! Collection wrapper for displaying groups of todo items.

use std::fmt;

use crate::models::TodoItem;

/// Newtype wrapper for displaying a list of todo items.
///
/// Each item is rendered with its own `Display` implementation; an empty
/// list renders as a single "No todos found." line.
pub struct TodoList(pub Vec<TodoItem>);

impl From<Vec<TodoItem>> for TodoList {
    fn from(items: Vec<TodoItem>) -> Self {
        Self(items)
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No todos found.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(TodoList(vec![]).to_string(), "No todos found.\n");
    }

    #[test]
    fn test_list_keeps_order() {
        let first = TodoItem::new("First", None, None);
        let second = TodoItem::new("Second", None, None);
        let output = TodoList::from(vec![first, second]).to_string();

        let first_pos = output.find("## First").unwrap();
        let second_pos = output.find("## Second").unwrap();
        assert!(first_pos < second_pos);
        assert!(!output.contains("No todos found."));
    }
}
