//! State management for the review form TUI.
//!
//! This module provides the core state types for the input form, keyboard
//! focus, and the cached review listing.

mod focus;
mod form;
mod review_list;

pub use focus::Focus;
pub use form::{FormField, ReviewForm};
pub use review_list::{FetchOutcome, ReviewListState};
