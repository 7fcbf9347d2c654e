//! Startup context storage for the review analyzer TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and
//! `ReviewApp::init()`.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::analysis::ReviewAnalysisGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the gateway used by submissions and list fetches.
static GATEWAY: OnceLock<Arc<dyn ReviewAnalysisGateway>> = OnceLock::new();

/// Global storage for whether the review list starts open.
static INITIAL_SHOW_REVIEWS: OnceLock<bool> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts and read by `ReviewApp::init()`
/// so the first frame uses the actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the gateway for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without it,
/// every submission and list fetch fails with a configuration error.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_gateway(gateway: Arc<dyn ReviewAnalysisGateway>) -> bool {
    GATEWAY.set(gateway).is_ok()
}

/// Sets whether the review list is open when the program starts.
///
/// When `true`, the list is fetched immediately after startup.
///
/// # Returns
///
/// `true` if the flag was set, `false` if it was already set.
pub fn set_initial_show_reviews(show: bool) -> bool {
    INITIAL_SHOW_REVIEWS.set(show).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets the configured gateway, if any.
pub(crate) fn get_gateway() -> Option<Arc<dyn ReviewAnalysisGateway>> {
    GATEWAY.get().cloned()
}

/// Gets the initial review list visibility, defaulting to hidden.
pub(crate) fn get_initial_show_reviews() -> bool {
    INITIAL_SHOW_REVIEWS.get().copied().unwrap_or(false)
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
