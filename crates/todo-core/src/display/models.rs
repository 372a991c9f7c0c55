//! Display implementations for the todo domain model.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{CompletionFilter, TodoItem};

impl TodoItem {
    /// Status label with its icon, as shown in headings.
    pub fn status_with_icon(&self) -> &'static str {
        if self.is_completed {
            "✓ Done"
        } else {
            "○ Todo"
        }
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.title, self.status_with_icon())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(updated_at) = &self.updated_at {
            writeln!(f, "- Updated: {}", LocalDateTime(updated_at))?;
        }
        if let Some(due_date) = &self.due_date {
            writeln!(f, "- Due: {}", LocalDateTime(due_date))?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CompletionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompletionFilter::All => "all",
            CompletionFilter::Completed => "completed",
            CompletionFilter::Incomplete => "incomplete",
        };
        f.write_str(label)
    }
}
