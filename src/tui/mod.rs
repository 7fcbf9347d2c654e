//! Terminal User Interface for submitting and browsing product reviews.
//!
//! This module provides an interactive form that posts a review to the
//! analysis service, shows the returned sentiment and key points, and can
//! list previously analyzed reviews. It is built on the bubbletea-rs
//! framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: Rendering logic in `app::rendering` and [`components`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Network requests never run inside `update()`. They are returned as
//! commands whose completion comes back as an [`messages::AppMsg`].
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and initial settings are stored in module-level
//! `OnceLock`s. Call [`set_gateway`] (and optionally the other setters)
//! before starting the program.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ReviewApp;
pub(crate) use storage::{
    get_gateway, get_initial_show_reviews, get_initial_terminal_size, get_telemetry_sink,
};
pub use storage::{
    set_gateway, set_initial_show_reviews, set_initial_terminal_size, set_telemetry_sink,
};
