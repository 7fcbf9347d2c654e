//! Review list handlers.
//!
//! Each fetch carries the request id issued by `ReviewListState`. A
//! completion for any older id is dropped, which keeps a slow response from
//! overwriting a newer list.

use std::any::Any;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::{ReviewApp, elapsed_ms};
use crate::analysis::{AnalysisError, ReviewOperation, ReviewRecord};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::{FetchOutcome, Focus};

impl ReviewApp {
    /// Dispatches review list messages to their handlers.
    pub(super) fn handle_review_list_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ToggleReviewList => self.handle_toggle_review_list(),
            AppMsg::RefreshReviews => self.handle_refresh_reviews(),
            AppMsg::ReviewsLoaded {
                request_id,
                reviews,
                latency_ms,
            } => {
                self.handle_reviews_loaded(*request_id, reviews, *latency_ms);
                None
            }
            AppMsg::ReviewsFailed {
                request_id,
                message,
            } => {
                self.handle_reviews_failed(*request_id, message);
                None
            }
            _ => {
                // Unreachable: caller filters to review list messages.
                None
            }
        }
    }

    fn handle_toggle_review_list(&mut self) -> Option<Cmd> {
        let should_fetch = self.review_list.toggle();
        if !self.review_list.is_visible() && self.focus == Focus::ReviewList {
            self.focus = Focus::ReviewsButton;
        }
        if should_fetch {
            return self.start_review_fetch();
        }
        None
    }

    /// Refetches an open list unless a fetch is already outstanding.
    fn handle_refresh_reviews(&mut self) -> Option<Cmd> {
        if !self.review_list.is_visible() || self.review_list.is_loading() {
            return None;
        }
        self.start_review_fetch()
    }

    /// Issues a new listing request, superseding any in flight.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn start_review_fetch(&mut self) -> Option<Cmd> {
        let request_id = self.review_list.begin_fetch();
        self.error = None;
        tracing::debug!(request_id, "fetching review list");

        let gateway = self.services.gateway.clone();
        Some(Box::pin(async move {
            let started = Instant::now();
            let outcome = match gateway {
                Some(gateway) => gateway.list_reviews().await,
                None => Err(AnalysisError::Configuration {
                    message: "no review analysis gateway configured".to_owned(),
                }),
            };

            let msg = match outcome {
                Ok(reviews) => AppMsg::ReviewsLoaded {
                    request_id,
                    reviews,
                    latency_ms: elapsed_ms(started),
                },
                Err(error) => {
                    tracing::warn!(%error, request_id, "review list fetch failed");
                    AppMsg::ReviewsFailed {
                        request_id,
                        message: error.user_message(ReviewOperation::List),
                    }
                }
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        }))
    }

    fn handle_reviews_loaded(&mut self, request_id: u64, reviews: &[ReviewRecord], latency_ms: u64) {
        match self.review_list.complete(request_id, reviews.to_vec()) {
            FetchOutcome::Applied => {
                tracing::debug!(request_id, count = reviews.len(), "review list applied");
                self.services.record(TelemetryEvent::ReviewsFetched {
                    latency_ms,
                    review_count: reviews.len(),
                });
                self.scroll_by(0);
            }
            FetchOutcome::Stale => self.discard_stale(request_id),
        }
    }

    fn handle_reviews_failed(&mut self, request_id: u64, message: &str) {
        match self.review_list.fail(request_id) {
            FetchOutcome::Applied => self.error = Some(message.to_owned()),
            FetchOutcome::Stale => self.discard_stale(request_id),
        }
    }

    fn discard_stale(&self, request_id: u64) {
        tracing::debug!(
            request_id,
            latest = self.review_list.latest_request(),
            "discarding stale review list response"
        );
        self.services
            .record(TelemetryEvent::StaleReviewsDiscarded { request_id });
    }
}
