//! Filter types for querying todo items.

use serde::{Deserialize, Serialize};

use super::TodoItem;

/// Completion status filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionFilter {
    /// Every item regardless of completion
    #[default]
    All,

    /// Only completed items
    Completed,

    /// Only items not yet completed
    Incomplete,
}

impl CompletionFilter {
    /// The `IsCompleted` value this filter selects, if any.
    pub fn is_completed(&self) -> Option<bool> {
        match self {
            CompletionFilter::All => None,
            CompletionFilter::Completed => Some(true),
            CompletionFilter::Incomplete => Some(false),
        }
    }

    /// Whether the given item passes this filter.
    pub fn matches(&self, item: &TodoItem) -> bool {
        self.is_completed()
            .map_or(true, |completed| completed == item.is_completed)
    }
}
