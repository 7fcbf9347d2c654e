//! Visibility, loading flag, and cached contents of the review list.
//!
//! Every fetch is tagged with a monotonically increasing request id. Only the
//! completion of the most recently issued fetch is applied, so a slow
//! response can never overwrite a newer one.

use crate::analysis::ReviewRecord;

/// Whether a fetch completion was applied or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The completion matched the latest request and updated the state.
    Applied,
    /// A newer request had been issued; the completion was ignored.
    Stale,
}

/// State behind the "All Reviews" section.
#[derive(Debug, Clone, Default)]
pub struct ReviewListState {
    reviews: Vec<ReviewRecord>,
    visible: bool,
    loading: bool,
    latest_request: u64,
}

impl ReviewListState {
    /// Creates an empty list with the given visibility.
    #[must_use]
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    /// Returns the cached reviews in service order.
    #[must_use]
    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    /// Returns whether the list section is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the id of the most recently issued fetch, or zero if none.
    #[must_use]
    pub const fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Flips visibility.
    ///
    /// Returns `true` when the list was just opened and no fetch is already
    /// in flight, meaning the caller should start one.
    pub const fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible && !self.loading
    }

    /// Marks a new fetch as started and returns its request id.
    pub const fn begin_fetch(&mut self) -> u64 {
        self.latest_request = self.latest_request.wrapping_add(1);
        self.loading = true;
        self.latest_request
    }

    /// Applies a successful fetch if it is the latest one.
    ///
    /// The cached list is replaced wholesale, never merged.
    pub fn complete(&mut self, request_id: u64, reviews: Vec<ReviewRecord>) -> FetchOutcome {
        if request_id != self.latest_request {
            return FetchOutcome::Stale;
        }
        self.reviews = reviews;
        self.loading = false;
        FetchOutcome::Applied
    }

    /// Records a failed fetch if it is the latest one.
    ///
    /// The previously cached reviews are kept.
    pub const fn fail(&mut self, request_id: u64) -> FetchOutcome {
        if request_id != self.latest_request {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        FetchOutcome::Applied
    }
}
