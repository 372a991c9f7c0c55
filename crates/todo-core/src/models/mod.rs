//! Data models for todo items.
//!
//! This module contains the domain model of the service: the [`TodoItem`]
//! entity, its [`TodoId`] identifier, and the [`CompletionFilter`] used to
//! select list views. Display implementations live in
//! [`crate::display`] so presentation stays out of the model definitions.
//!
//! # Invariants
//!
//! - `id` is assigned once at creation and never reused
//! - `title` is never empty and at most
//!   [`MAX_TITLE_LENGTH`](crate::params::MAX_TITLE_LENGTH) characters
//! - `updated_at`, when present, is not earlier than `created_at`
//!
//! Items are never shared in memory across requests: every handler
//! invocation loads a fresh copy from storage.
//!
//! # Examples
//!
//! ```rust
//! use todo_core::models::{CompletionFilter, TodoItem};
//!
//! let item = TodoItem::new("Buy milk", None, None);
//! assert!(!item.is_completed);
//! assert!(item.updated_at.is_none());
//! assert!(CompletionFilter::Incomplete.matches(&item));
//! ```

pub mod filters;
pub mod todo;


pub use filters::CompletionFilter;
pub use todo::{TodoId, TodoItem};
