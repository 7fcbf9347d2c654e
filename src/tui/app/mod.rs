//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! review analyzer form. It coordinates the form, the analysis result, and
//! the review list, and turns network operations into commands.
//!
//! # Module Structure
//!
//! - `form_handlers`: Text editing of the focused field
//! - `navigation`: Focus movement, button activation, and page scrolling
//! - `submit_handlers`: The analyze request and its completion
//! - `review_list_handlers`: Review list toggling, fetching, and sequencing
//! - `lifecycle_handlers`: Startup, help, resize, and quit
//! - `model_impl`: The `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use crate::analysis::{AnalysisResult, ReviewAnalysisGateway};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::messages::AppMsg;
use super::state::{Focus, ReviewForm, ReviewListState};

mod form_handlers;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod review_list_handlers;
mod submit_handlers;


/// Collaborators used by command futures.
#[derive(Clone)]
struct AppServices {
    gateway: Option<Arc<dyn ReviewAnalysisGateway>>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl AppServices {
    fn record(&self, event: TelemetryEvent) {
        self.telemetry.record(event);
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self {
            gateway: None,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }
}

impl fmt::Debug for AppServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppServices")
            .field("gateway", &self.gateway.as_ref().map(|_| "<gateway>"))
            .finish_non_exhaustive()
    }
}

/// Main application model for the review analyzer TUI.
#[derive(Debug)]
pub struct ReviewApp {
    /// Raw contents of the two inputs.
    pub(crate) form: ReviewForm,
    /// Element receiving keyboard input.
    pub(crate) focus: Focus,
    /// Whether an analyze request is in flight.
    pub(crate) loading: bool,
    /// Text of the error region, if any.
    pub(crate) error: Option<String>,
    /// The most recent analysis result.
    pub(crate) result: Option<AnalysisResult>,
    /// Review list visibility, cache, and request sequencing.
    pub(crate) review_list: ReviewListState,
    /// First body row shown below the header.
    pub(crate) scroll_offset: usize,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    services: AppServices,
}

impl Default for ReviewApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewApp {
    /// Creates an application with an empty form and the list hidden.
    ///
    /// Without a gateway every request fails; attach one with
    /// [`Self::with_gateway`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: ReviewForm::default(),
            focus: Focus::default(),
            loading: false,
            error: None,
            result: None,
            review_list: ReviewListState::new(false),
            scroll_offset: 0,
            show_help: false,
            width: 80,
            height: 24,
            services: AppServices::default(),
        }
    }

    /// Sets the gateway used for both service operations.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn ReviewAnalysisGateway>) -> Self {
        self.services.gateway = Some(gateway);
        self
    }

    /// Sets the telemetry sink.
    #[must_use]
    pub fn with_telemetry_sink(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.services.telemetry = sink;
        self
    }

    /// Sets whether the review list starts open.
    ///
    /// An open list is fetched when `AppMsg::Initialized` is handled.
    #[must_use]
    pub fn with_show_reviews(mut self, show: bool) -> Self {
        self.review_list = ReviewListState::new(show);
        self
    }

    /// Sets the terminal dimensions used for the first frame.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the form contents.
    #[must_use]
    pub const fn form(&self) -> &ReviewForm {
        &self.form
    }

    /// Returns the focused element.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns whether an analyze request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the error region text, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the displayed analysis result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Returns the review list state.
    #[must_use]
    pub const fn review_list(&self) -> &ReviewListState {
        &self.review_list
    }

    /// Returns whether the help overlay is shown.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_form_edit() {
            return self.handle_form_edit_msg(msg);
        }
        if msg.is_focus() || msg.is_scroll() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_submission() {
            return self.handle_submission_msg(msg);
        }
        if msg.is_review_list() {
            return self.handle_review_list_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}

/// Milliseconds elapsed since `started`, saturating at `u64::MAX`.
fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
