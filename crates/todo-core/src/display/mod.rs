//! Markdown formatting of todo items for terminal output.
//!
//! Domain models stay free of presentation code: the [`fmt::Display`]
//! implementation for [`TodoItem`](crate::models::TodoItem) lives in
//! [`models`], and collections are formatted through the [`TodoList`]
//! newtype so an empty result still renders a readable line.
//!
//! ```rust
//! use todo_core::{display::TodoList, models::TodoItem};
//!
//! let list = TodoList(vec![TodoItem::new("Buy milk", None, None)]);
//! let output = list.to_string();
//! assert!(output.contains("Buy milk"));
//! assert!(output.contains("○ Todo"));
//!
//! assert_eq!(TodoList(vec![]).to_string(), "No todos found.\n");
//! ```
//!
//! [`fmt::Display`]: std::fmt::Display

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::TodoList;
pub use datetime::LocalDateTime;
